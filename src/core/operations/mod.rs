//! Core operations behind the `list` and `create` commands.
//!
//! Handlers receive the gateway explicitly and write through an
//! [`OutputWriter`](crate::core::output::OutputWriter), so they can run
//! against any [`DevOpsGateway`](crate::api::DevOpsGateway) and any stream.
//!
//! # Modules
//!
//! - [`repository_lookup`] - Resolving a repository by exact name
//! - [`list`] - Writing the active pull requests of a repository
//! - [`create`] - Submitting a new pull request

pub mod create;
pub mod list;
pub mod repository_lookup;

pub use create::{CreateHandler, CreateRequest};
pub use list::ListHandler;
pub use repository_lookup::{fetch_repository, resolve_repository};
