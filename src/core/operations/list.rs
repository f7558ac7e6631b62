//! Listing of active pull requests.

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use super::repository_lookup::fetch_repository;
use crate::api::DevOpsGateway;
use crate::core::output::OutputWriter;
use crate::error::AdoPrError;
use crate::models::{PullRequestStatus, PullRequestSummary};

/// Handler for `ado-pr list`.
pub struct ListHandler {
    gateway: Arc<dyn DevOpsGateway>,
}

impl ListHandler {
    pub fn new(gateway: Arc<dyn DevOpsGateway>) -> Self {
        Self { gateway }
    }

    /// Writes every active pull request of `repository_name` in remote order.
    ///
    /// Returns the listed pull requests.
    pub async fn run<W: Write>(
        &self,
        repository_name: &str,
        output: &mut OutputWriter<W>,
    ) -> Result<Vec<PullRequestSummary>, AdoPrError> {
        let repository = fetch_repository(self.gateway.as_ref(), repository_name).await?;

        let pull_requests = self
            .gateway
            .list_pull_requests(&repository, PullRequestStatus::Active)
            .await?;
        info!(
            repository = %repository.name,
            count = pull_requests.len(),
            "active pull requests"
        );

        for pull_request in &pull_requests {
            output.write_summary(pull_request)?;
        }
        output.flush()?;

        Ok(pull_requests)
    }
}
