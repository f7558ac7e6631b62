//! Azure DevOps API module.
//!
//! ## Features
//!
//! - Repository listing for the configured project
//! - Pull request listing filtered by status
//! - Pull request creation
//!
//! Handlers talk to the service through the [`DevOpsGateway`] trait;
//! [`AzureDevOpsClient`] is the implementation backed by `azure_devops_rust_api`.

mod client;
mod mappers;
pub mod traits;

pub use client::AzureDevOpsClient;
pub use mappers::{pull_request_web_url, repository_web_url};
pub use traits::DevOpsGateway;
