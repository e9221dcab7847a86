// file: src/cli/args.rs
// version: 1.0.0
// guid: 72b20eee-cfac-4a9d-8cdc-4030518d2295

//! Command line argument definitions

use crate::build::BuildType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dommus-build")]
#[command(about = "Configure and build the Dommus editor with CMake")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        env = "DOMMUS_BUILD_CONFIG",
        help = "Configuration file (defaults to ./dommus-build.toml when present)"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure, build and export compile_commands.json
    Build {
        #[arg(short, long, value_enum, help = "Skip the interactive prompt")]
        build_type: Option<BuildTypeArg>,

        #[arg(short, long, help = "Override the parallel job count")]
        jobs: Option<usize>,

        #[arg(long, help = "Show what would be done without actually doing it")]
        dry_run: bool,

        #[arg(long, help = "Continue after a failed configure or build step")]
        keep_going: bool,
    },

    /// Check that the build tools are installed
    CheckPrereqs,

    /// Print the effective configuration
    ShowConfig {
        #[arg(short, long)]
        json: bool,
    },
}

/// Build type argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum BuildTypeArg {
    Debug,
    Release,
}

impl From<BuildTypeArg> for BuildType {
    fn from(arg: BuildTypeArg) -> Self {
        match arg {
            BuildTypeArg::Debug => BuildType::Debug,
            BuildTypeArg::Release => BuildType::Release,
        }
    }
}
