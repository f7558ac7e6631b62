//! Conversions between azure_devops_rust_api types and the domain types.
//!
//! Every optional upstream field falls back to its empty value, so a record
//! with missing data (e.g. a service account author without a display name)
//! still produces a summary.

use chrono::{DateTime, Utc};
use url::Url;

use crate::models::{PullRequestDraft, PullRequestStatus, PullRequestSummary, Repository};
use azure_devops_rust_api::git::models as git_models;
use azure_devops_rust_api::git::models::git_pull_request::Status;

impl From<git_models::GitRepository> for Repository {
    fn from(repo: git_models::GitRepository) -> Self {
        Repository {
            id: repo.id,
            name: repo.name,
            default_branch: repo.default_branch.filter(|b| !b.is_empty()),
            project: repo.project.name,
        }
    }
}

impl From<Status> for PullRequestStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::NotSet => PullRequestStatus::NotSet,
            Status::Active => PullRequestStatus::Active,
            Status::Abandoned => PullRequestStatus::Abandoned,
            Status::Completed => PullRequestStatus::Completed,
            Status::All => PullRequestStatus::All,
        }
    }
}

/// Converts an SDK pull request into a summary.
///
/// The page URL is taken from the repository reference embedded in `pr` and
/// falls back to `repository_web_url` when the response leaves it out.
pub(crate) fn summarize(
    pr: git_models::GitPullRequest,
    repository_web_url: &str,
) -> PullRequestSummary {
    let url = pr
        .repository
        .web_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .or(Some(repository_web_url).filter(|u| !u.is_empty()))
        .map(|web_url| pull_request_web_url(web_url, pr.pull_request_id))
        .unwrap_or_default();

    PullRequestSummary {
        title: pr.title.unwrap_or_default(),
        status: pr.status.into(),
        source_branch: pr.source_ref_name,
        target_branch: pr.target_ref_name,
        author: pr
            .created_by
            .graph_subject_base
            .display_name
            .unwrap_or_default(),
        created_on: to_chrono(pr.creation_date),
        is_draft: pr.is_draft,
        url,
    }
}

impl From<&PullRequestDraft> for git_models::GitPullRequestCreateOptions {
    fn from(draft: &PullRequestDraft) -> Self {
        let mut options = git_models::GitPullRequestCreateOptions::new(
            draft.source_ref_name.clone(),
            draft.target_ref_name.clone(),
            draft.title.clone(),
        );
        options.description = Some(draft.description.clone());
        options.is_draft = Some(draft.is_draft);
        options
    }
}

/// Builds the browser URL of a repository, `{endpoint}/{organization}/{project}/_git/{name}`.
#[must_use]
pub fn repository_web_url(
    endpoint: &Url,
    organization: &str,
    project: &str,
    name: &str,
) -> String {
    let mut url = endpoint.clone();
    url.set_query(None);
    url.set_fragment(None);
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments
                .pop_if_empty()
                .extend([organization, project, "_git", name]);
        }
        Err(()) => return String::new(),
    }
    url.to_string()
}

/// Builds the browser URL of a pull request from its repository's web URL.
#[must_use]
pub fn pull_request_web_url(repository_web_url: &str, pull_request_id: i32) -> String {
    format!(
        "{}/pullrequest/{}",
        repository_web_url.trim_end_matches('/'),
        pull_request_id
    )
}

fn to_chrono(date: time::OffsetDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(date.unix_timestamp(), date.nanosecond()).unwrap_or_default()
}
