// file: src/build/runner.rs
// version: 1.0.0
// guid: dce1febf-172a-4675-83a8-a0002d151f18

//! External command execution

use crate::error::BuildError;
use crate::Result;
use std::fmt;
use std::future::Future;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A program and its argument list, executed without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a `-D NAME=VALUE` cache entry
    pub fn define(self, name: &str, value: &str) -> Self {
        self.arg("-D").arg(format!("{}={}", name, value))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether `flag` appears as a standalone argument
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status of a finished step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl StepStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for running external build steps
pub trait CommandRunner {
    /// Run the invocation to completion and report its exit status
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<StepStatus>> + Send;
}

/// Runs invocations as child processes sharing this terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<StepStatus> {
        debug!("Spawning: {}", invocation);

        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                BuildError::execution(format!(
                    "Failed to execute {}: {}",
                    invocation.program(),
                    e
                ))
            })?;

        Ok(StepStatus {
            code: status.code(),
        })
    }
}
