// file: src/main.rs
// version: 1.0.0
// guid: 32ccef64-c96f-4974-be4a-a0a722b7a15b

//! dommus-build - Main entry point

use clap::Parser;
use dommus_build::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
};
use std::io::IsTerminal;
use tokio::signal;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    let command_future = async {
        match cli.command {
            Commands::Build {
                build_type,
                jobs,
                dry_run,
                keep_going,
            } => {
                build_command(
                    config_path,
                    build_type.map(Into::into),
                    jobs,
                    dry_run,
                    keep_going,
                )
                .await
            }
            Commands::CheckPrereqs => check_prerequisites_command(config_path).await,
            Commands::ShowConfig { json } => show_config_command(config_path, json).await,
        }
    };

    // ctrl_c is polled first so its handler is registered before any prompt
    tokio::select! {
        biased;

        _ = signal::ctrl_c() => {
            warn!("Build interrupted by user");
            std::process::exit(130);
        }
        result = command_future => {
            if let Err(e) = result {
                error!("{}", e);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
