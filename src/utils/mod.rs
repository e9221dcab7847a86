// file: src/utils/mod.rs
// version: 1.0.0
// guid: d5a819a4-700d-462f-aa02-3dcd4272cc02

//! Utility modules for system operations

pub mod system;

pub use system::{HostProbe, SystemProbe, SystemUtils};
