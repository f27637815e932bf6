use std::fmt;

/// `GL_TABLE_TOO_LARGE` from the imaging subset; glow does not export it.
pub const TABLE_TOO_LARGE: u32 = 0x8031;

/// A non-zero value read from the GL error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `GL_INVALID_ENUM`
    InvalidEnum,
    /// `GL_INVALID_VALUE`
    InvalidValue,
    /// `GL_INVALID_OPERATION`
    InvalidOperation,
    /// `GL_STACK_OVERFLOW`
    StackOverflow,
    /// `GL_STACK_UNDERFLOW`
    StackUnderflow,
    /// `GL_OUT_OF_MEMORY`
    OutOfMemory,
    /// `GL_INVALID_FRAMEBUFFER_OPERATION`
    InvalidFramebufferOperation,
    /// `GL_CONTEXT_LOST`
    ContextLost,
    /// `GL_TABLE_TOO_LARGE`
    TableTooLarge,
    /// Any code outside the known table.
    Unknown(u32),
}

impl ErrorCode {
    /// Every known code, in table order.
    pub const KNOWN: [ErrorCode; 9] = [
        ErrorCode::InvalidEnum,
        ErrorCode::InvalidValue,
        ErrorCode::InvalidOperation,
        ErrorCode::StackOverflow,
        ErrorCode::StackUnderflow,
        ErrorCode::OutOfMemory,
        ErrorCode::InvalidFramebufferOperation,
        ErrorCode::ContextLost,
        ErrorCode::TableTooLarge,
    ];

    /// Classifies a raw `glGetError` value. Returns `None` for `GL_NO_ERROR`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        use ErrorCode::*;

        let code = match raw {
            glow::NO_ERROR => return None,
            glow::INVALID_ENUM => InvalidEnum,
            glow::INVALID_VALUE => InvalidValue,
            glow::INVALID_OPERATION => InvalidOperation,
            glow::STACK_OVERFLOW => StackOverflow,
            glow::STACK_UNDERFLOW => StackUnderflow,
            glow::OUT_OF_MEMORY => OutOfMemory,
            glow::INVALID_FRAMEBUFFER_OPERATION => InvalidFramebufferOperation,
            glow::CONTEXT_LOST => ContextLost,
            TABLE_TOO_LARGE => TableTooLarge,
            other => Unknown(other),
        };

        Some(code)
    }

    /// The raw GL enum value.
    pub fn raw(&self) -> u32 {
        use ErrorCode::*;

        match self {
            InvalidEnum => glow::INVALID_ENUM,
            InvalidValue => glow::INVALID_VALUE,
            InvalidOperation => glow::INVALID_OPERATION,
            StackOverflow => glow::STACK_OVERFLOW,
            StackUnderflow => glow::STACK_UNDERFLOW,
            OutOfMemory => glow::OUT_OF_MEMORY,
            InvalidFramebufferOperation => glow::INVALID_FRAMEBUFFER_OPERATION,
            ContextLost => glow::CONTEXT_LOST,
            TableTooLarge => TABLE_TOO_LARGE,
            Unknown(raw) => *raw,
        }
    }

    /// Category name as it appears in reported messages.
    pub fn name(&self) -> &'static str {
        use ErrorCode::*;

        match self {
            InvalidEnum => "GL_INVALID_ENUM",
            InvalidValue => "GL_INVALID_VALUE",
            InvalidOperation => "GL_INVALID_OPERATION",
            StackOverflow => "GL_STACK_OVERFLOW",
            StackUnderflow => "GL_STACK_UNDERFLOW",
            OutOfMemory => "GL_OUT_OF_MEMORY",
            InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            ContextLost => "GL_CONTEXT_LOST",
            TableTooLarge => "GL_TABLE_TOO_LARGE",
            Unknown(_) => "unknown error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Unknown(raw) => write!(f, "{} (0x{raw:04X})", self.name()),
            known => f.write_str(known.name()),
        }
    }
}

/// Source location of a checked statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Source text of the statement, as produced by `stringify!`.
    pub statement: String,
    /// Line of the statement, as produced by `line!`.
    pub line: u32,
    /// File of the statement, as produced by `file!`.
    pub file: String,
}

impl CallSite {
    /// Captures a statement location; the strings are copied.
    #[must_use]
    pub fn new(statement: &str, line: u32, file: &str) -> Self {
        Self {
            statement: statement.to_string(),
            line,
            file: file.to_string(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from statement \"{}\" at line \"{}\" in file \"{}\"",
            self.statement, self.line, self.file
        )
    }
}
