//! Error types for the command-line front end.

use rpn_query::EvalError;
use thiserror::Error;

/// Errors that can end a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The expression or query could not be evaluated.
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// Reading documents or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) => 2,
            Self::Eval(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
