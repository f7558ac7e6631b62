//! Detection of the Azure DevOps project from the `origin` remote.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

/// Organization, project and repository parsed from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureDevOpsRemote {
    pub organization: String,
    pub project: String,
    pub repository: String,
    /// The remote URL the values were parsed from.
    pub url: String,
}

// Capture groups are (organization, project, repository).
static REMOTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // user@vs-ssh.visualstudio.com:v3/org/project/repo
        r"^[^@]+@vs-ssh\.visualstudio\.com:v3/(?P<org>[^/]+)/(?P<project>[^/]+)/(?P<repo>[^/]+)/?$",
        // git@ssh.dev.azure.com:v3/org/project/repo
        r"^[^@]+@ssh\.dev\.azure\.com:v3/(?P<org>[^/]+)/(?P<project>[^/]+)/(?P<repo>[^/]+)/?$",
        // https://[user@]dev.azure.com/org/project/_git/repo
        r"^https://[^@]*@?dev\.azure\.com/(?P<org>[^/]+)/(?P<project>[^/]+)/_git/(?P<repo>[^/]+)/?$",
        // https://[user@]dev.azure.com/org/project/repo
        r"^https://[^@]*@?dev\.azure\.com/(?P<org>[^/]+)/(?P<project>[^/]+)/(?P<repo>[^/]+)/?$",
        // https://org.visualstudio.com/project/_git/repo
        r"^https://(?P<org>[^.]+)\.visualstudio\.com/(?P<project>[^/]+)/_git/(?P<repo>[^/]+)/?$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("remote URL pattern must compile"))
    .collect()
});

/// Reads the `origin` remote of the repository at `repo_path` and parses it.
///
/// Returns `Ok(None)` when the remote is not an Azure DevOps URL.
pub fn detect_azure_devops_remote(repo_path: &Path) -> Result<Option<AzureDevOpsRemote>> {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(["remote", "get-url", "origin"])
        .output()
        .context("Failed to get git remote URL")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to get git remote URL: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(parse_azure_devops_url(&url))
}

/// Parses organization, project and repository out of an Azure DevOps remote URL.
pub fn parse_azure_devops_url(url: &str) -> Option<AzureDevOpsRemote> {
    REMOTE_PATTERNS.iter().find_map(|pattern| {
        let captures = pattern.captures(url)?;
        Some(AzureDevOpsRemote {
            organization: captures["org"].to_string(),
            project: captures["project"].to_string(),
            repository: captures["repo"].to_string(),
            url: url.to_string(),
        })
    })
}
