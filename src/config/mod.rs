// file: src/config/mod.rs
// version: 1.0.0
// guid: eb07971e-42b6-483d-8e6f-953e6e6f6870

//! Configuration module for dommus-build
//!
//! Holds the project settings that parameterize the CMake invocations and
//! the location of the generated compilation database.

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::BuildError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "dommus-build.toml";

/// Build wrapper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// CMake source directory (`-S`)
    pub source_dir: PathBuf,
    /// Parent of the per-build-type directories
    pub build_root: PathBuf,
    /// Value of the `MAIN_TARGET` cache entry
    pub main_target: String,
    /// CMake generator name (`-G`)
    pub generator: String,
    /// Value of `CMAKE_RUNTIME_OUTPUT_DIRECTORY`
    pub runtime_output_dir: String,
    /// File name of the generated artifact to relocate
    pub artifact: String,
    /// Fixed job count; the host is queried when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    /// Continue after a failed configure or build step
    pub keep_going: bool,
    /// Extra `-D` cache entries appended to the configure step
    pub defines: BTreeMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            build_root: PathBuf::from("build"),
            main_target: "DommusEditor".to_string(),
            generator: "Unix Makefiles".to_string(),
            runtime_output_dir: "bin".to_string(),
            artifact: "compile_commands.json".to_string(),
            jobs: None,
            keep_going: false,
            defines: BTreeMap::new(),
        }
    }
}

impl BuildConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.main_target.trim().is_empty() {
            return Err(BuildError::config("main_target cannot be empty"));
        }

        if self.generator.trim().is_empty() {
            return Err(BuildError::config("generator cannot be empty"));
        }

        if self.artifact.trim().is_empty() {
            return Err(BuildError::config("artifact cannot be empty"));
        }

        if self.build_root.as_os_str().is_empty() {
            return Err(BuildError::config("build_root cannot be empty"));
        }

        if self.jobs == Some(0) {
            return Err(BuildError::config("jobs must be at least 1"));
        }

        for key in self.defines.keys() {
            if key.is_empty() || key.contains('=') || key.chars().any(char::is_whitespace) {
                return Err(BuildError::config(format!("Invalid define name: '{}'", key)));
            }
        }

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_editor_project() {
        let config = BuildConfig::default();
        assert_eq!(config.main_target, "DommusEditor");
        assert_eq!(config.generator, "Unix Makefiles");
        assert_eq!(config.build_root, PathBuf::from("build"));
        assert_eq!(config.artifact, "compile_commands.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_jobs() {
        let config = BuildConfig {
            jobs: Some(0),
            ..BuildConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_define_names() {
        for name in ["", "A=B", "WITH SPACE"] {
            let mut config = BuildConfig::default();
            config.defines.insert(name.to_string(), "ON".to_string());
            assert!(config.validate().is_err(), "define {:?}", name);
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BuildConfig = toml::from_str("main_target = \"DommusRuntime\"\n").unwrap();
        assert_eq!(config.main_target, "DommusRuntime");
        assert_eq!(config.generator, "Unix Makefiles");
        assert!(!config.keep_going);
    }

    #[test]
    fn test_to_toml_includes_defines() {
        let mut config = BuildConfig::default();
        config.defines.insert("DOMMUS_ASSERTS".to_string(), "ON".to_string());

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("main_target = \"DommusEditor\""));
        assert!(rendered.contains("DOMMUS_ASSERTS = \"ON\""));
        assert!(!rendered.contains("jobs"));
    }
}
