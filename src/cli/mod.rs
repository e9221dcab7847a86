// file: src/cli/mod.rs
// version: 1.0.0
// guid: bf3fd20b-00a0-4675-8e7d-18e668b5b770

//! Command line interface for dommus-build

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
