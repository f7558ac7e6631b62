//! Unified error handling for ado-pr.
//!
//! This module provides the error hierarchy using `thiserror`, so that every
//! failure can be mapped to a distinct exit code by the runner.
//!
//! ## Error Categories
//!
//! - [`ConfigError`]: missing or invalid configuration, detected before any network call
//! - [`AdoPrError::Connection`]: the authenticated client could not reach the service
//! - [`AdoPrError::RepositoryNotFound`]: no repository matched the requested name
//! - [`ApiError`]: pull request listing or creation was rejected by the service
//!
//! ## Example
//!
//! ```rust
//! use ado_pr::error::{AdoPrError, ConfigError};
//!
//! fn example() -> Result<(), AdoPrError> {
//!     Err(ConfigError::MissingRequired {
//!         field: "token".to_string(),
//!         env_var: "AZ_DEVOPS_TOKEN".to_string(),
//!     })?;
//!     Ok(())
//! }
//! assert!(example().is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::core::ExitCode;

/// The main error type for ado-pr.
#[derive(Error, Debug)]
pub enum AdoPrError {
    /// Configuration was missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The authenticated client could not be established or could not reach the service.
    #[error("Connection error: {0}")]
    Connection(String),

    /// No repository in the listing matched the requested name.
    #[error("no repo found")]
    RepositoryNotFound {
        /// The name that was looked up.
        name: String,
        /// The listing error, when the repositories could not be fetched at all.
        cause: Option<String>,
    },

    /// The remote service rejected a pull request operation.
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// Writing rendered output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AdoPrError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AdoPrError::Config(_) => ExitCode::ConfigurationError,
            AdoPrError::Connection(_) => ExitCode::ConnectionError,
            AdoPrError::RepositoryNotFound { .. } => ExitCode::RepositoryNotFound,
            AdoPrError::Remote(_) => ExitCode::RemoteError,
            AdoPrError::Output(_) => ExitCode::GeneralError,
        }
    }
}

/// Errors returned by the remote pull request operations.
///
/// The message of the underlying SDK error is carried unmodified.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Listing pull requests failed.
    #[error("{message}")]
    ListPullRequests {
        /// Error message from the service.
        message: String,
    },

    /// Creating a pull request failed.
    #[error("{message}")]
    CreatePullRequest {
        /// Error message from the service.
        message: String,
    },
}

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration field is missing.
    #[error("{field} is required (use --{field}, {env_var} env var, or config file)")]
    MissingRequired {
        /// Name of the missing field.
        field: String,
        /// Environment variable name for this field.
        env_var: String,
    },

    /// The source branch was not given and could not be detected.
    #[error("source branch could not be detected from git (use --source)")]
    SourceBranchUndetected,

    /// Failed to read the configuration file.
    #[error("Failed to read config file at {path}: {message}")]
    FileReadError {
        /// Path to the config file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError {
        /// Path to the config file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// An invalid value was provided for a configuration field.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Name of the field with invalid value.
        field: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// Failed to create config directory.
    #[error("Failed to create config directory at {path}: {message}")]
    DirectoryCreationError {
        /// Path where directory creation failed.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}
