//! Local git/workspace inspection used for command defaults.

use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// Returns the currently checked out branch of the repository at `repo_path`.
///
/// Fails when `repo_path` is not a git repository or HEAD is detached.
pub fn current_branch(repo_path: &Path) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .output()
        .context("Failed to run git rev-parse")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to determine current branch: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() || branch == "HEAD" {
        anyhow::bail!("HEAD is detached, no current branch");
    }

    Ok(branch)
}

/// Returns the final path component of `dir`, used as the default repository name.
pub fn dir_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Returns the current working directory.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read current directory")
}
