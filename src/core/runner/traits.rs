//! Common types for command runs.

use crate::core::ExitCode;
use crate::error::AdoPrError;

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Exit code for the operation.
    pub exit_code: ExitCode,
    /// Optional message to display on stderr.
    pub message: Option<String>,
}

impl RunResult {
    /// Creates a successful result.
    pub fn success() -> Self {
        Self {
            exit_code: ExitCode::Success,
            message: None,
        }
    }

    /// Creates a success result with a message.
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Success,
            message: Some(message.into()),
        }
    }

    /// Creates an error result.
    pub fn error(code: ExitCode, message: impl Into<String>) -> Self {
        Self {
            exit_code: code,
            message: Some(message.into()),
        }
    }

    /// Creates an error result from a failed command.
    ///
    /// For a repository that could not be found because the listing itself
    /// failed, the listing error is appended to the generic message.
    pub fn from_error(error: &AdoPrError) -> Self {
        let message = match error {
            AdoPrError::RepositoryNotFound {
                cause: Some(cause), ..
            } => format!("{error}: {cause}"),
            _ => error.to_string(),
        };
        Self::error(error.exit_code(), message)
    }

    /// Returns true if the result indicates success.
    pub fn is_success(&self) -> bool {
        self.exit_code == ExitCode::Success
    }
}

impl From<Result<(), AdoPrError>> for RunResult {
    fn from(result: Result<(), AdoPrError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(e) => Self::from_error(&e),
        }
    }
}
