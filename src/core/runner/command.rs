//! Command runner wiring configuration, gateway and handlers.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, error};

use super::traits::RunResult;
use super::workspace::WorkspaceDefaults;
use crate::api::DevOpsGateway;
use crate::config::{Config, ConnectionSettings};
use crate::core::operations::{CreateHandler, CreateRequest, ListHandler};
use crate::core::output::OutputWriter;
use crate::error::{AdoPrError, ConfigError};
use crate::models::Commands;

/// Runs one subcommand.
///
/// Configuration and command inputs are validated before `connect` is called,
/// so a configuration error never reaches the network.
pub struct CommandRunner<'a> {
    config: Config,
    workspace: &'a WorkspaceDefaults,
}

impl<'a> CommandRunner<'a> {
    pub fn new(config: Config, workspace: &'a WorkspaceDefaults) -> Self {
        Self { config, workspace }
    }

    /// Runs `command` and converts the outcome into a [`RunResult`].
    pub async fn run<W, C>(
        self,
        command: Commands,
        connect: C,
        output: &mut OutputWriter<W>,
    ) -> RunResult
    where
        W: Write,
        C: FnOnce(&ConnectionSettings) -> Result<Arc<dyn DevOpsGateway>, AdoPrError>,
    {
        let result = self.execute(command, connect, output).await;
        if let Err(e) = &result {
            error!(error = %e, exit_code = e.exit_code().code(), "command failed");
        }
        result.into()
    }

    /// Runs `command` and returns the error unchanged.
    pub async fn execute<W, C>(
        self,
        command: Commands,
        connect: C,
        output: &mut OutputWriter<W>,
    ) -> Result<(), AdoPrError>
    where
        W: Write,
        C: FnOnce(&ConnectionSettings) -> Result<Arc<dyn DevOpsGateway>, AdoPrError>,
    {
        let workspace = self.workspace;
        let settings = self
            .config
            .resolve(|| workspace.remote_project.clone())?;

        match command {
            Commands::List(args) => {
                let name = repository_name(args.name, workspace)?;
                let gateway = connect(&settings)?;
                debug!(repository = %name, "running list");
                ListHandler::new(gateway).run(&name, output).await?;
            }
            Commands::Create(args) => {
                let request = CreateRequest {
                    repository_name: repository_name(args.name, workspace)?,
                    source: args
                        .source
                        .filter(|s| !s.is_empty())
                        .or_else(|| workspace.current_branch.clone())
                        .ok_or(ConfigError::SourceBranchUndetected)?,
                    target: args.target.filter(|t| !t.is_empty()),
                    message: args.message,
                    is_draft: args.draft,
                };
                let gateway = connect(&settings)?;
                debug!(repository = %request.repository_name, "running create");
                CreateHandler::new(gateway).run(&request, output).await?;
            }
        }

        Ok(())
    }
}

fn repository_name(
    name: Option<String>,
    workspace: &WorkspaceDefaults,
) -> Result<String, ConfigError> {
    name.filter(|n| !n.is_empty())
        .or_else(|| workspace.repository_name.clone())
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "name".to_string(),
            message: "no repository name given and none could be derived from the working directory"
                .to_string(),
        })
}
