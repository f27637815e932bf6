//! Call-site OpenGL error checking.
//!
//! A [`Debugger`] wraps a GL context and checks the error state after each
//! call passed through [`gld_call!`], as well as shader compile and program
//! link status. Findings are formatted into a message and handed to a
//! registered [`Sink`]; nothing is reported without one.
//!
//! Which checks are compiled in is decided by the build: see [`gl::checks`].

mod bounded;
pub mod error;
pub mod gl;
mod macros;
mod reporter;
#[cfg(test)]
mod testing;

pub use bounded::{INFO_LOG_CAPACITY, MESSAGE_CAPACITY};
pub use error::Error;
pub use gl::{
    ActiveChecks, BuildOnly, CallSite, CheckLevel, DebugContext, Debugger, ErrorCode, Full,
    ShaderProgram, ShaderType, Unchecked,
};
pub use reporter::{Reporter, Sink, TracingSink};
