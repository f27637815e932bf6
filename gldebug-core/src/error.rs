use crate::gl::{CallSite, ErrorCode};

/// Error categories surfaced by the checked GL paths.
///
/// The `Display` output of each variant is the text handed to the registered
/// [`Sink`](crate::Sink), before it is bounded to
/// [`MESSAGE_CAPACITY`](crate::MESSAGE_CAPACITY).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A GL call left an error code in the context's error state.
    #[error("\"{code}\" {site}")]
    Call {
        /// The code read from the error state.
        code: ErrorCode,
        /// Where the offending statement lives.
        site: CallSite,
    },

    /// A shader object failed to compile.
    #[error("shader compile error for program \"{identifier}\":\n{log}")]
    Compile {
        /// Caller supplied name of the shader or program.
        identifier: String,
        /// Driver info log, bounded to [`INFO_LOG_CAPACITY`](crate::INFO_LOG_CAPACITY).
        log: String,
    },

    /// A program object failed to link.
    #[error("shader link error for program \"{identifier}\":\n{log}")]
    Link {
        /// Caller supplied name of the program.
        identifier: String,
        /// Driver info log, bounded to [`INFO_LOG_CAPACITY`](crate::INFO_LOG_CAPACITY).
        log: String,
    },

    /// GL object creation errors.
    #[error("Resource error: {0}")]
    Resource(String),
}

impl Error {
    pub(crate) fn call(code: ErrorCode, site: CallSite) -> Self {
        Self::Call { code, site }
    }

    pub(crate) fn compile_failed(identifier: &str, log: String) -> Self {
        Self::Compile { identifier: identifier.to_string(), log }
    }

    pub(crate) fn link_failed(identifier: &str, log: String) -> Self {
        Self::Link { identifier: identifier.to_string(), log }
    }

    // Resource errors
    pub(crate) fn shader_creation_failed(detail: &str) -> Self {
        Self::Resource(format!("Shader creation failed: {detail}"))
    }

    pub(crate) fn program_creation_failed(detail: &str) -> Self {
        Self::Resource(format!("Shader program creation failed: {detail}"))
    }
}
