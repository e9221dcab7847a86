// file: src/build/pipeline.rs
// version: 1.0.0
// guid: 373b85bf-d29c-4972-86c4-75051d8a4f9f

//! Sequential configure, build and relocate run

use super::artifact::{self, Relocation};
use super::cmake::{build_invocation, configure_invocation};
use super::runner::{CommandRunner, Invocation, ProcessRunner, StepStatus};
use super::{BuildPaths, BuildType};
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::utils::system::{HostProbe, SystemProbe};
use crate::Result;
use std::io::Write;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

/// Printed when the host parallelism cannot be determined
pub const JOBS_FALLBACK_MESSAGE: &str =
    "Fail to get the number of CPU cores. Omitting the jobs flag!";

/// Summary of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub build_type: BuildType,
    pub configure: Invocation,
    pub build: Invocation,
    /// `None` for dry runs
    pub configure_status: Option<StepStatus>,
    pub build_status: Option<StepStatus>,
    pub relocation: Option<Relocation>,
}

impl BuildReport {
    /// Whether every executed step exited successfully
    pub fn all_steps_succeeded(&self) -> bool {
        [self.configure_status, self.build_status]
            .iter()
            .flatten()
            .all(StepStatus::success)
    }
}

/// Drives one build of the project
pub struct Pipeline<R = ProcessRunner, P = SystemProbe> {
    config: BuildConfig,
    runner: R,
    probe: P,
    dry_run: bool,
}

impl Pipeline {
    /// Create a pipeline that spawns real processes
    pub fn new(config: BuildConfig) -> Self {
        Self::with_parts(config, ProcessRunner, SystemProbe)
    }
}

impl<R: CommandRunner, P: HostProbe> Pipeline<R, P> {
    /// Create a pipeline with explicit runner and host probe
    pub fn with_parts(config: BuildConfig, runner: R, probe: P) -> Self {
        Self {
            config,
            runner,
            probe,
            dry_run: false,
        }
    }

    /// Print invocations instead of executing them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Job count for the build step.
    ///
    /// A configured value wins. Otherwise the host is queried, and a failed
    /// query yields `None` so the job flag is left out.
    pub fn jobs(&self) -> Option<NonZeroUsize> {
        self.jobs_with_notice(&mut std::io::stdout())
    }

    /// Same as [`Pipeline::jobs`], writing the fallback notice to `out`
    pub fn jobs_with_notice<W: Write>(&self, out: &mut W) -> Option<NonZeroUsize> {
        if let Some(jobs) = self.config.jobs.and_then(NonZeroUsize::new) {
            return Some(jobs);
        }

        match self.probe.available_parallelism() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Parallelism query failed: {}", e);
                if let Err(e) = writeln!(out, "{}", JOBS_FALLBACK_MESSAGE) {
                    debug!("Could not print jobs notice: {}", e);
                }
                None
            }
        }
    }

    /// Run the configure and build steps, then relocate the artifact
    pub async fn run(&self, build_type: BuildType) -> Result<BuildReport> {
        let paths = BuildPaths::new(&self.config, build_type);
        let configure = configure_invocation(&self.config, build_type);

        let configure_status = self.run_step("configure", &configure).await?;

        let build = build_invocation(&self.config, build_type, self.jobs());
        let build_status = self.run_step("build", &build).await?;

        let relocation = if self.dry_run {
            println!(
                "DRY RUN: Would move {} to {}",
                paths.generated_artifact.display(),
                paths.relocated_artifact.display()
            );
            None
        } else {
            Some(artifact::relocate(&paths)?)
        };

        Ok(BuildReport {
            build_type,
            configure,
            build,
            configure_status,
            build_status,
            relocation,
        })
    }

    async fn run_step(&self, step: &str, invocation: &Invocation) -> Result<Option<StepStatus>> {
        if self.dry_run {
            println!("DRY RUN: Would execute: {}", invocation);
            return Ok(None);
        }

        info!("Running {} step: {}", step, invocation);
        let status = self.runner.run(invocation).await?;

        if !status.success() {
            let message = match status.code {
                Some(code) => format!("{} step failed with exit code {}", step, code),
                None => format!("{} step was terminated by a signal", step),
            };

            if self.config.keep_going {
                warn!("{}, continuing", message);
            } else {
                return Err(BuildError::execution(format!("{}: {}", message, invocation)));
            }
        }

        Ok(Some(status))
    }
}
