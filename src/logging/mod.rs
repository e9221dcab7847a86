// file: src/logging/mod.rs
// version: 1.0.0
// guid: dfa742d2-0c16-4141-ba8c-7e84419e7a79

//! Logging system for dommus-build

pub mod logger;

pub use logger::init_logger;
