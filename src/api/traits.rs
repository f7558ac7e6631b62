//! The gateway trait over the Azure DevOps API.
//!
//! Command handlers depend on [`DevOpsGateway`] rather than on the concrete
//! client, so they can be exercised with a substitute gateway in tests.

use async_trait::async_trait;

use crate::error::AdoPrError;
use crate::models::{PullRequestDraft, PullRequestStatus, PullRequestSummary, Repository};

/// The three remote operations used by the commands.
///
/// Each call is a direct proxy to the service: no retries, no pagination.
#[async_trait]
pub trait DevOpsGateway: Send + Sync {
    /// Lists the repositories visible to the connection.
    async fn list_repositories(&self) -> Result<Vec<Repository>, AdoPrError>;

    /// Lists pull requests of one repository filtered by status.
    async fn list_pull_requests(
        &self,
        repository: &Repository,
        status: PullRequestStatus,
    ) -> Result<Vec<PullRequestSummary>, AdoPrError>;

    /// Submits a new pull request and returns the created record.
    async fn create_pull_request(
        &self,
        repository: &Repository,
        draft: &PullRequestDraft,
    ) -> Result<PullRequestSummary, AdoPrError>;
}
