// file: src/lib.rs
// version: 1.0.0
// guid: 9fd6455c-d980-4ba1-9894-061c67e53417

//! # dommus-build
//!
//! Interactive build wrapper for the Dommus editor. Selects a build type,
//! drives the CMake generation and build steps, and moves the generated
//! compilation database to the top of the build tree where editor tooling
//! expects it.

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use build::{BuildType, Pipeline};
pub use config::BuildConfig;
pub use error::{BuildError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
