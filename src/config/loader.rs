// file: src/config/loader.rs
// version: 1.0.0
// guid: a69a797e-b8c9-440b-a02c-30a87b971d6a

//! Configuration file loading and environment variable substitution

use super::{BuildConfig, DEFAULT_CONFIG_FILE};
use crate::error::BuildError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
    working_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader rooted at the current directory
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
            working_dir: PathBuf::from("."),
        }
    }

    /// Create a loader that looks for the default config file in `dir`
    pub fn with_working_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            working_dir: dir.into(),
            ..Self::new()
        }
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default file in the
    /// working directory is used when present, otherwise built-in defaults.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<BuildConfig> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(BuildError::file_not_found(format!(
                    "config file {}",
                    path.display()
                )));
            }
            return self.load_build_config(path);
        }

        let default_path = self.working_dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return self.load_build_config(&default_path);
        }

        debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        Ok(BuildConfig::default())
    }

    /// Load build configuration from a TOML file
    pub fn load_build_config<P: AsRef<Path>>(&self, path: P) -> Result<BuildConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            BuildError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: BuildConfig = toml::from_str(&expanded)?;

        config.validate()?;

        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Expand `${VAR}` references in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| BuildError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars: Vec<String> = Vec::new();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            if !self.env_vars.contains_key(var_name)
                && !missing_vars.iter().any(|v| v == var_name)
            {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(BuildError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            self.env_vars
                .get(&caps[1])
                .cloned()
                .unwrap_or_default()
        });

        Ok(result.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
