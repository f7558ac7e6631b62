use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use ado_pr::{
    Args, AzureDevOpsClient, Config, DevOpsGateway,
    core::output::{OutputWriter, should_style},
    core::runner::{CommandRunner, RunResult, WorkspaceDefaults},
    logging::{init_logging, parse_early_log_config},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let _log_guard = init_logging(parse_early_log_config(&raw_args));

    let args = Args::parse();

    // Handle --create-config flag
    if args.create_config {
        let result = match Config::create_sample_config() {
            Ok(Some(path)) => {
                RunResult::success_with_message(format!("Created config at {}", path.display()))
            }
            Ok(None) => RunResult::success_with_message("Config file already exists, left untouched"),
            Err(e) => RunResult::from_error(&e.into()),
        };
        return finish(result);
    }

    let Some(command) = args.command else {
        return finish(Args::write_help(&mut std::io::stdout()).into());
    };

    let config = match Config::layered(&args.connection) {
        Ok(config) => config,
        Err(e) => return finish(RunResult::from_error(&e.into())),
    };

    let workspace = WorkspaceDefaults::detect();
    let mut output = OutputWriter::new(std::io::stdout().lock(), should_style(args.no_color));

    let result = CommandRunner::new(config, &workspace)
        .run(
            command,
            |settings| {
                AzureDevOpsClient::from_settings(settings)
                    .map(|client| Arc::new(client) as Arc<dyn DevOpsGateway>)
            },
            &mut output,
        )
        .await;

    finish(result)
}

fn finish(result: RunResult) -> ExitCode {
    if let Some(message) = &result.message {
        if result.is_success() {
            println!("{message}");
        } else {
            eprintln!("Error: {message}");
        }
    }
    result.exit_code.into()
}
