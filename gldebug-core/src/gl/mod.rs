pub mod checks;
mod code;
mod context;
mod debugger;
mod program;

pub use checks::{ActiveChecks, BuildOnly, CheckLevel, Full, Unchecked};
pub use code::{CallSite, ErrorCode, TABLE_TOO_LARGE};
pub use context::DebugContext;
pub use debugger::{Debugger, MAX_DRAINED_ERRORS};
pub use program::{ShaderProgram, ShaderType};
