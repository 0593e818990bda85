// file: src/error.rs
// version: 3.1.0
// guid: 50682faa-33ca-4cc3-91b4-6df4ba1e1f77

use crate::config::Mode;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, QwrError>;

/// Malformed or incomplete command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown flag {0}")]
    UnknownFlag(String),

    #[error("option --{flag} requires `={hint}`")]
    MissingValue { flag: &'static str, hint: &'static str },

    #[error("unknown argument {0}")]
    UnknownArgument(String),

    #[error("multiple modes specified (`{first}` and `{second}`)")]
    MultipleModes { first: Mode, second: Mode },

    #[error("no mode specified")]
    NoMode,

    #[error("`{mode}` requires --{flag}")]
    MissingField { mode: Mode, flag: &'static str },

    #[error("option --{flag} requires a UTF-8 value, got `{value}`")]
    InvalidEncoding { flag: &'static str, value: String },
}

/// Error types for the launcher
#[derive(Error, Debug)]
pub enum QwrError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("{0}")]
    Execution(String),

    #[error("required program `{0}` was not found in PATH")]
    ToolNotFound(String),

    #[error("failed to initialize logger: {0}")]
    Logging(String),
}

impl QwrError {
    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new tool-not-found error
    pub fn tool_not_found(program: impl Into<String>) -> Self {
        Self::ToolNotFound(program.into())
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
