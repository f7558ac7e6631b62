//! Defaults derived from the working directory.

use std::path::Path;

use tracing::debug;

use crate::git::{current_branch, current_dir, dir_name};
use crate::git_config::detect_azure_devops_remote;
use crate::parsed_property::ParsedProperty;

/// Values picked up from the local checkout when not given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceDefaults {
    /// Folder name of the working directory.
    pub repository_name: Option<String>,
    /// Currently checked out branch.
    pub current_branch: Option<String>,
    /// Project parsed from an Azure DevOps `origin` remote.
    pub remote_project: Option<ParsedProperty<String>>,
}

impl WorkspaceDefaults {
    /// Inspects the current working directory.
    ///
    /// Detection failures leave the corresponding value empty.
    pub fn detect() -> Self {
        match current_dir() {
            Ok(dir) => Self::detect_in(&dir),
            Err(e) => {
                debug!(error = %e, "working directory unavailable");
                Self::default()
            }
        }
    }

    /// Inspects the checkout at `dir`.
    pub fn detect_in(dir: &Path) -> Self {
        let current_branch = current_branch(dir)
            .inspect_err(|e| debug!(error = %e, "no current branch"))
            .ok();

        let remote_project = match detect_azure_devops_remote(dir) {
            Ok(Some(remote)) => Some(ParsedProperty::Git(remote.project, remote.url)),
            Ok(None) => None,
            Err(e) => {
                debug!(error = %e, "no origin remote");
                None
            }
        };

        Self {
            repository_name: dir_name(dir),
            current_branch,
            remote_project,
        }
    }
}
