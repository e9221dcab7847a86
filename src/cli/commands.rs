// file: src/cli/commands.rs
// version: 1.0.0
// guid: 3400de19-d441-4bf8-afed-23a8fa5c8e25

//! Command implementations for the CLI

use crate::{
    build::{prompt_build_type, BuildType, Pipeline},
    config::{BuildConfig, ConfigLoader},
    error::BuildError,
    logging::logger::with_async_operation_span,
    utils::system::{HostProbe, SystemProbe, SystemUtils},
    Result,
};
use colored::Colorize;
use std::path::Path;
use tracing::{error, info};

/// Load configuration and apply command line overrides
fn load_config(
    config_path: Option<&Path>,
    jobs: Option<usize>,
    keep_going: bool,
) -> Result<BuildConfig> {
    let mut config = ConfigLoader::new().resolve(config_path)?;

    if jobs.is_some() {
        config.jobs = jobs;
    }
    if keep_going {
        config.keep_going = true;
    }

    config.validate()?;
    Ok(config)
}

/// Select a build type, then configure, build and relocate the artifact
pub async fn build_command(
    config_path: Option<&Path>,
    build_type: Option<BuildType>,
    jobs: Option<usize>,
    dry_run: bool,
    keep_going: bool,
) -> Result<()> {
    let config = load_config(config_path, jobs, keep_going)?;

    let build_type = match build_type {
        Some(build_type) => build_type,
        None => {
            let mut reader = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            prompt_build_type(&mut reader, &mut stdout).await?
        }
    };

    println!("Making a {} build...", build_type.label());

    let pipeline = Pipeline::new(config).dry_run(dry_run);
    let report =
        with_async_operation_span(build_type.label(), || pipeline.run(build_type)).await?;

    if let Some(relocation) = &report.relocation {
        info!(
            "{} {}",
            if relocation.replaced { "Replaced" } else { "Created" },
            relocation.destination.display()
        );
    }

    let done = format!("{} build completed!", build_type.label());
    if report.all_steps_succeeded() {
        println!("{}", done.green());
    } else {
        println!("{} {}", done.yellow(), "(with failed steps)".yellow());
    }

    Ok(())
}

/// Check that the tools needed for the configured generator are installed
pub async fn check_prerequisites_command(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, None, false)?;

    info!("Checking prerequisites for generator '{}'", config.generator);
    let checks = SystemUtils::check_prerequisites(&config.generator);

    for check in &checks {
        match &check.path {
            Some(path) => println!("{} {} ({})", "✓".green(), check.name, path.display()),
            None => println!("{} {} not found in PATH", "✗".red(), check.name),
        }
    }

    match SystemProbe.available_parallelism() {
        Ok(n) => println!("{} {} parallel jobs available", "✓".green(), n),
        Err(e) => println!("{} parallelism unknown: {}", "!".yellow(), e),
    }

    let missing: Vec<&str> = checks
        .iter()
        .filter(|c| !c.found())
        .map(|c| c.name.as_str())
        .collect();

    if !missing.is_empty() {
        error!("Missing required tools: {}", missing.join(", "));
        return Err(BuildError::system(format!(
            "Missing required tools: {}",
            missing.join(", ")
        )));
    }

    info!("All prerequisites satisfied");
    Ok(())
}

/// Print the effective configuration
pub async fn show_config_command(config_path: Option<&Path>, json_output: bool) -> Result<()> {
    let config = load_config(config_path, None, false)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
