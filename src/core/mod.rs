//! Core module for the pull request commands.
//!
//! - Repository resolution and the list/create command handlers
//! - Rendering of pull request summaries
//! - The runner that wires configuration, the gateway and the handlers together
//! - Exit codes for the CLI

pub mod operations;
pub mod output;
pub mod runner;

/// Exit codes for the CLI.
///
/// Every failure category terminates the process with its own non-zero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The command completed successfully.
    Success = 0,

    /// Error not covered by a more specific category (e.g. output failure).
    GeneralError = 1,

    /// Missing or invalid configuration.
    ConfigurationError = 2,

    /// The authenticated client could not reach the service.
    ConnectionError = 3,

    /// No repository matched the requested name.
    RepositoryNotFound = 4,

    /// The service rejected a pull request operation.
    RemoteError = 5,
}

impl ExitCode {
    /// Returns the numeric exit code value.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns a human-readable description of the exit code.
    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "Command completed successfully",
            ExitCode::GeneralError => "General error occurred",
            ExitCode::ConfigurationError => "Missing or invalid configuration",
            ExitCode::ConnectionError => "Could not connect to Azure DevOps",
            ExitCode::RepositoryNotFound => "No repository matched the requested name",
            ExitCode::RemoteError => "Azure DevOps rejected the request",
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
