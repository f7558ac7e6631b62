//! # ado-pr Library
//!
//! List and create Azure DevOps pull requests from the command line.
//! This library provides:
//!
//! - A gateway over the Azure DevOps Git API
//! - Layered configuration (CLI, environment, config file, git remote)
//! - Repository lookup and the list/create command handlers
//! - Rendering of pull request summaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ado_pr::core::operations::ListHandler;
//! use ado_pr::core::output::OutputWriter;
//! use ado_pr::{AzureDevOpsClient, Config};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Config::default()
//!     .merge(Config::load_from_env())
//!     .resolve(|| None)?;
//! let client = AzureDevOpsClient::from_settings(&settings)?;
//!
//! let mut output = OutputWriter::new(std::io::stdout(), false);
//! let prs = ListHandler::new(Arc::new(client))
//!     .run("my-repo", &mut output)
//!     .await?;
//! println!("Found {} active pull requests", prs.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod git_config;
pub mod logging;
pub mod models;
pub mod parsed_property;
pub mod utils;

// Re-export commonly used types for convenience
pub use api::{AzureDevOpsClient, DevOpsGateway};
pub use config::{Config, ConnectionSettings};
pub use error::{AdoPrError, ApiError, ConfigError};
pub use models::{Args, Commands, PullRequestDraft, PullRequestStatus, PullRequestSummary, Repository};

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdoPrError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
