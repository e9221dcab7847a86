// file: src/build/mod.rs
// version: 1.0.0
// guid: 6df87896-4908-45f1-8a26-69a206383132

//! Build module for dommus-build
//!
//! Selects the build type, constructs the CMake invocations, runs them in
//! order and relocates the generated compilation database.

pub mod artifact;
pub mod cmake;
pub mod mode;
pub mod pipeline;
pub mod runner;

pub use artifact::Relocation;
pub use mode::{prompt_build_type, BuildType};
pub use pipeline::{BuildReport, Pipeline};
pub use runner::{CommandRunner, Invocation, ProcessRunner, StepStatus};

use crate::config::BuildConfig;
use std::path::PathBuf;

/// Filesystem locations derived from the configuration and a build type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// `<build_root>/<BuildType>`
    pub build_dir: PathBuf,
    /// Artifact as written by the generation step
    pub generated_artifact: PathBuf,
    /// Artifact location at the top of the build tree
    pub relocated_artifact: PathBuf,
}

impl BuildPaths {
    pub fn new(config: &BuildConfig, build_type: BuildType) -> Self {
        let build_dir = config.build_root.join(build_type.label());
        Self {
            generated_artifact: build_dir.join(&config.artifact),
            relocated_artifact: config.build_root.join(&config.artifact),
            build_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_paths_for_debug() {
        let paths = BuildPaths::new(&BuildConfig::default(), BuildType::Debug);

        assert_eq!(paths.build_dir, PathBuf::from("build/Debug"));
        assert_eq!(
            paths.generated_artifact,
            PathBuf::from("build/Debug/compile_commands.json")
        );
        assert_eq!(
            paths.relocated_artifact,
            PathBuf::from("build/compile_commands.json")
        );
    }

    #[test]
    fn test_build_paths_follow_configured_root() {
        let config = BuildConfig {
            build_root: PathBuf::from("out"),
            ..BuildConfig::default()
        };
        let paths = BuildPaths::new(&config, BuildType::Release);

        assert_eq!(paths.build_dir, PathBuf::from("out/Release"));
        assert_eq!(paths.relocated_artifact, PathBuf::from("out/compile_commands.json"));
    }
}
