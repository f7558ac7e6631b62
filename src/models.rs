use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, CommandFactory, Parser, Subcommand};

use crate::error::AdoPrError;

/// Version string shown by `--version`, including the build's git hash.
pub const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Connection arguments accepted before the subcommand.
#[derive(ClapArgs, Clone, Default, Debug)]
pub struct ConnectionArgs {
    /// Your Azure DevOps personal access token [env: AZ_DEVOPS_TOKEN]
    #[arg(short = 't', long, help_heading = "Azure DevOps Connection")]
    pub token: Option<String>,

    /// Base Azure DevOps URL, e.g. https://dev.azure.com/myorg [env: AZ_DEVOPS_URL]
    #[arg(short = 'g', long, help_heading = "Azure DevOps Connection")]
    pub az_url: Option<String>,

    /// Azure DevOps project name [env: AZ_DEVOPS_PROJECT]
    #[arg(short, long, help_heading = "Azure DevOps Connection")]
    pub project: Option<String>,
}

/// Logging arguments. These are also read early from the raw argument list
/// so that logging is active while the configuration is resolved.
#[derive(ClapArgs, Clone, Default, Debug)]
pub struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error) [env: ADO_PR_LOG_LEVEL]
    #[arg(long, help_heading = "Logging")]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr [env: ADO_PR_LOG_FILE]
    #[arg(long, help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Log format (text, json) [env: ADO_PR_LOG_FORMAT]
    #[arg(long, help_heading = "Logging")]
    pub log_format: Option<String>,
}

/// Arguments for `ado-pr list`.
#[derive(ClapArgs, Clone, Default, Debug)]
pub struct ListArgs {
    /// Name of the repository, defaults to the current directory name
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for `ado-pr create`.
#[derive(ClapArgs, Clone, Default, Debug)]
pub struct CreateArgs {
    /// Name of the repository, defaults to the current directory name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Pull request message as "TITLE;DESCRIPTION"
    #[arg(short, long)]
    pub message: String,

    /// Create the pull request as a draft
    #[arg(short, long)]
    pub draft: bool,

    /// The head branch. Defaults to the currently checked out branch
    #[arg(short, long)]
    pub source: Option<String>,

    /// The base branch. Defaults to the default branch of the repository
    #[arg(short, long)]
    pub target: Option<String>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List all active pull requests in the repository
    List(ListArgs),
    /// Create a pull request
    Create(CreateArgs),
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "ado-pr",
    author,
    version = VERSION_STRING,
    about = "A quick and easy way to list and create pull requests to Azure DevOps from the CLI",
    long_about = "A quick and easy way to list and create pull requests to Azure DevOps from the CLI.\n\n\
        Configuration can be provided via CLI arguments, environment variables (AZ_DEVOPS_*),\n\
        config file (~/.config/ado-pr/config.toml), or auto-detected from the git remote.",
    after_help = "EXAMPLES:\n    \
        # List active pull requests of the repository named after the current directory\n    \
        ado-pr --token <PAT> list\n\n    \
        # Create a draft pull request into the default branch\n    \
        ado-pr create -m \"Add feature;Longer description\" --draft\n\n    \
        # Create sample config file\n    \
        ado-pr --create-config"
)]
pub struct Args {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long)]
    pub no_color: bool,

    /// Create a sample configuration file at ~/.config/ado-pr/config.toml
    #[arg(long)]
    pub create_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Writes the usage text shown when no subcommand is given.
    pub fn write_help(out: &mut impl std::io::Write) -> Result<(), AdoPrError> {
        Self::command().write_help(out)?;
        Ok(())
    }
}

/// A repository as returned by the repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: String,
    pub name: String,
    /// Fully qualified default branch, e.g. `refs/heads/main`.
    pub default_branch: Option<String>,
    /// Name of the project owning the repository.
    pub project: String,
}

/// Pull request status as reported by Azure DevOps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestStatus {
    #[default]
    NotSet,
    Active,
    Abandoned,
    Completed,
    All,
}

impl PullRequestStatus {
    /// The status as used by the REST API (`searchCriteria.status`).
    pub fn as_api_str(self) -> &'static str {
        match self {
            PullRequestStatus::NotSet => "notSet",
            PullRequestStatus::Active => "active",
            PullRequestStatus::Abandoned => "abandoned",
            PullRequestStatus::Completed => "completed",
            PullRequestStatus::All => "all",
        }
    }
}

impl std::fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Display projection of a remote pull request.
///
/// Missing upstream values are represented by their empty/zero value and are
/// omitted when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub title: String,
    pub status: PullRequestStatus,
    pub source_branch: String,
    pub target_branch: String,
    pub author: String,
    pub created_on: DateTime<Utc>,
    pub is_draft: bool,
    /// Web URL of the pull request, empty when unknown.
    pub url: String,
}

/// The pull request to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDraft {
    pub title: String,
    pub description: String,
    pub source_ref_name: String,
    pub target_ref_name: String,
    pub is_draft: bool,
}
