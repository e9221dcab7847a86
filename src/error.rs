// file: src/error.rs
// version: 1.0.0
// guid: 5961279a-cc86-4772-908d-4c62c284bfea

use thiserror::Error;

/// Result type alias for the build wrapper
pub type Result<T> = std::result::Result<T, BuildError>;

/// Error types for dommus-build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("System error: {0}")]
    System(String),
}

impl BuildError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new file not found error
    pub fn file_not_found(msg: impl Into<String>) -> Self {
        Self::FileNotFound(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildError::invalid_argument("expected an integer, got 'abc'");
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected an integer, got 'abc'"
        );

        let err = BuildError::file_not_found("build/Debug/compile_commands.json");
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BuildError = io.into();
        assert!(matches!(err, BuildError::Io(_)));
    }
}
