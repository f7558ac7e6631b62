//! Azure DevOps API client implementation using azure_devops_rust_api crate.
//!
//! This module provides the concrete [`DevOpsGateway`] used by the binary.

use async_trait::async_trait;
use azure_devops_rust_api::git;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use super::mappers::{repository_web_url, summarize};
use super::traits::DevOpsGateway;
use crate::config::ConnectionSettings;
use crate::error::{AdoPrError, ApiError};
use crate::models::{PullRequestDraft, PullRequestStatus, PullRequestSummary, Repository};

/// Azure DevOps API client for repository and pull request operations.
///
/// # Example
///
/// ```rust,no_run
/// use ado_pr::api::AzureDevOpsClient;
/// use ado_pr::DevOpsGateway;
/// use secrecy::SecretString;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AzureDevOpsClient::new(
///     url::Url::parse("https://dev.azure.com")?,
///     "my-org".to_string(),
///     "my-project".to_string(),
///     SecretString::from("my-pat".to_string()),
/// )?;
///
/// let repositories = client.list_repositories().await?;
/// println!("Found {} repositories", repositories.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AzureDevOpsClient {
    endpoint: Url,
    organization: String,
    project: String,
    git_client: git::Client,
}

impl AzureDevOpsClient {
    /// Creates a new client authenticated with a personal access token.
    ///
    /// # Security
    ///
    /// The PAT stays wrapped in a SecretString until it is handed to the SDK
    /// credential.
    pub fn new(
        endpoint: Url,
        organization: String,
        project: String,
        pat: SecretString,
    ) -> Result<Self, AdoPrError> {
        let builder = Self::client_builder(&endpoint, &pat)?;
        Ok(Self::with_builder(endpoint, organization, project, builder))
    }

    fn client_builder(
        endpoint: &Url,
        pat: &SecretString,
    ) -> Result<git::ClientBuilder, AdoPrError> {
        if pat.expose_secret().trim().is_empty() {
            return Err(AdoPrError::Connection(
                "personal access token is empty".to_string(),
            ));
        }

        let credential = azure_devops_rust_api::Credential::from_pat(pat.expose_secret().to_string());
        Ok(git::ClientBuilder::new(credential).endpoint(endpoint.clone()))
    }

    fn with_builder(
        endpoint: Url,
        organization: String,
        project: String,
        builder: git::ClientBuilder,
    ) -> Self {
        Self {
            endpoint,
            organization,
            project,
            git_client: builder.build(),
        }
    }

    /// Creates a client from resolved connection settings.
    pub fn from_settings(settings: &ConnectionSettings) -> Result<Self, AdoPrError> {
        Self::new(
            settings.endpoint.clone(),
            settings.organization.clone(),
            settings.project.value().clone(),
            settings.token.clone(),
        )
    }

    /// Returns the organization name.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the project name.
    pub fn project(&self) -> &str {
        &self.project
    }

    fn repository_web_url(&self, repository: &Repository) -> String {
        repository_web_url(
            &self.endpoint,
            &self.organization,
            &repository.project,
            &repository.name,
        )
    }
}

#[async_trait]
impl DevOpsGateway for AzureDevOpsClient {
    async fn list_repositories(&self) -> Result<Vec<Repository>, AdoPrError> {
        debug!(organization = %self.organization, project = %self.project, "listing repositories");

        let response = self
            .git_client
            .repositories_client()
            .list(&self.organization, &self.project)
            .await
            .map_err(|e| AdoPrError::Connection(e.to_string()))?;

        debug!(count = response.value.len(), "repositories listed");
        Ok(response.value.into_iter().map(Repository::from).collect())
    }

    async fn list_pull_requests(
        &self,
        repository: &Repository,
        status: PullRequestStatus,
    ) -> Result<Vec<PullRequestSummary>, AdoPrError> {
        debug!(repository = %repository.name, %status, "listing pull requests");

        let response = self
            .git_client
            .pull_requests_client()
            .get_pull_requests(&self.organization, &repository.id, &repository.project)
            .search_criteria_status(status.as_api_str())
            .await
            .map_err(|e| ApiError::ListPullRequests {
                message: e.to_string(),
            })?;

        debug!(count = response.value.len(), "pull requests listed");
        let repository_url = self.repository_web_url(repository);
        Ok(response
            .value
            .into_iter()
            .map(|pr| summarize(pr, &repository_url))
            .collect())
    }

    async fn create_pull_request(
        &self,
        repository: &Repository,
        draft: &PullRequestDraft,
    ) -> Result<PullRequestSummary, AdoPrError> {
        debug!(
            repository = %repository.name,
            source = %draft.source_ref_name,
            target = %draft.target_ref_name,
            is_draft = draft.is_draft,
            "creating pull request"
        );

        let created = self
            .git_client
            .pull_requests_client()
            .create(
                &self.organization,
                &repository.id,
                &repository.project,
                git::models::GitPullRequestCreateOptions::from(draft),
            )
            .await
            .map_err(|e| ApiError::CreatePullRequest {
                message: e.to_string(),
            })?;

        debug!(pull_request_id = created.pull_request_id, "pull request created");
        Ok(summarize(created, &self.repository_web_url(repository)))
    }
}
