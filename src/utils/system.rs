// file: src/utils/system.rs
// version: 1.0.0
// guid: 16593b8a-1626-4494-999f-8ef59d299d36

//! System utility functions

use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;

/// Query for host facts that influence the build
pub trait HostProbe {
    /// Number of jobs the host can run in parallel
    fn available_parallelism(&self) -> io::Result<NonZeroUsize>;
}

/// Probe backed by the running system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn available_parallelism(&self) -> io::Result<NonZeroUsize> {
        std::thread::available_parallelism()
    }
}

/// A tool looked up on PATH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheck {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl ToolCheck {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Tools the build needs for the given CMake generator
    pub fn required_tools(generator: &str) -> Vec<&'static str> {
        let mut tools = vec!["cmake"];
        match generator {
            "Unix Makefiles" => tools.push("make"),
            "Ninja" | "Ninja Multi-Config" => tools.push("ninja"),
            _ => {}
        }
        tools
    }

    /// Look up every required tool for `generator`
    pub fn check_prerequisites(generator: &str) -> Vec<ToolCheck> {
        Self::required_tools(generator)
            .into_iter()
            .map(|name| {
                let path = which::which(name).ok();
                debug!("Prerequisite {}: {:?}", name, path);
                ToolCheck {
                    name: name.to_string(),
                    path,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(!SystemUtils::command_exists("nonexistent-command-12345"));
    }

    #[test]
    fn test_required_tools_follow_generator() {
        assert_eq!(SystemUtils::required_tools("Unix Makefiles"), vec!["cmake", "make"]);
        assert_eq!(SystemUtils::required_tools("Ninja"), vec!["cmake", "ninja"]);
        assert_eq!(SystemUtils::required_tools("Xcode"), vec!["cmake"]);
    }

    #[test]
    fn test_check_prerequisites_reports_every_tool() {
        let checks = SystemUtils::check_prerequisites("Unix Makefiles");
        let names: Vec<&str> = checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["cmake", "make"]);
    }

    #[test]
    fn test_system_probe_reports_at_least_one() {
        if let Ok(n) = SystemProbe.available_parallelism() {
            assert!(n.get() >= 1);
        }
    }
}
