//! Creation of a pull request.

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use super::repository_lookup::fetch_repository;
use crate::api::DevOpsGateway;
use crate::core::output::OutputWriter;
use crate::error::{AdoPrError, ConfigError};
use crate::models::{PullRequestDraft, PullRequestSummary, Repository};
use crate::utils::{normalize_ref_name, split_message};

/// Input for `ado-pr create` after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub repository_name: String,
    /// Raw `TITLE;DESCRIPTION` message.
    pub message: String,
    /// Source branch, short or fully qualified.
    pub source: String,
    /// Target branch; the repository's default branch when `None`.
    pub target: Option<String>,
    pub is_draft: bool,
}

impl CreateRequest {
    /// Builds the draft to submit for `repository`.
    pub fn to_draft(&self, repository: &Repository) -> Result<PullRequestDraft, AdoPrError> {
        let target = self
            .target
            .clone()
            .or_else(|| repository.default_branch.clone())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "target".to_string(),
                message: format!(
                    "repository '{}' has no default branch (use --target)",
                    repository.name
                ),
            })?;
        let (title, description) = split_message(&self.message);

        Ok(PullRequestDraft {
            title,
            description,
            source_ref_name: normalize_ref_name(&self.source),
            target_ref_name: normalize_ref_name(&target),
            is_draft: self.is_draft,
        })
    }
}

/// Handler for `ado-pr create`.
pub struct CreateHandler {
    gateway: Arc<dyn DevOpsGateway>,
}

impl CreateHandler {
    pub fn new(gateway: Arc<dyn DevOpsGateway>) -> Self {
        Self { gateway }
    }

    /// Submits the pull request and writes the banner followed by its summary.
    pub async fn run<W: Write>(
        &self,
        request: &CreateRequest,
        output: &mut OutputWriter<W>,
    ) -> Result<PullRequestSummary, AdoPrError> {
        let repository =
            fetch_repository(self.gateway.as_ref(), &request.repository_name).await?;
        let draft = request.to_draft(&repository)?;

        let created = self
            .gateway
            .create_pull_request(&repository, &draft)
            .await?;
        info!(
            repository = %repository.name,
            source = %draft.source_ref_name,
            target = %draft.target_ref_name,
            "pull request created"
        );

        output.write_created_banner()?;
        output.write_summary(&created)?;
        output.flush()?;

        Ok(created)
    }
}
