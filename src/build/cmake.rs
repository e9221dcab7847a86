// file: src/build/cmake.rs
// version: 1.0.0
// guid: bc5167b1-8e0b-4b21-b68a-aa1b6ee0e86b

//! CMake command construction

use super::runner::Invocation;
use super::{BuildPaths, BuildType};
use crate::config::BuildConfig;
use std::num::NonZeroUsize;

/// CMake executable name
pub const CMAKE: &str = "cmake";

/// Build the generation step for `build_type`
pub fn configure_invocation(config: &BuildConfig, build_type: BuildType) -> Invocation {
    let paths = BuildPaths::new(config, build_type);
    let label = build_type.label();

    let mut invocation = Invocation::new(CMAKE)
        .arg("-S")
        .arg(config.source_dir.display().to_string())
        .arg("-B")
        .arg(paths.build_dir.display().to_string())
        .define("MAIN_TARGET", &config.main_target)
        .define("PROJECT_PATH_DEFINED", "OFF")
        .define("CMAKE_BUILD_TYPE", label)
        .define("CMAKE_EXPORT_COMPILE_COMMANDS", "1")
        .define("CMAKE_RUNTIME_OUTPUT_DIRECTORY", &config.runtime_output_dir)
        .define("GLFW_BUILD_WAYLAND", "OFF")
        .define("GLFW_BUILD_X11", "ON");

    for (name, value) in &config.defines {
        invocation = invocation.define(name, value);
    }

    invocation.arg("-G").arg(config.generator.clone())
}

/// Build the compile step, with a job count when one is known
pub fn build_invocation(
    config: &BuildConfig,
    build_type: BuildType,
    jobs: Option<NonZeroUsize>,
) -> Invocation {
    let paths = BuildPaths::new(config, build_type);

    let invocation = Invocation::new(CMAKE)
        .arg("--build")
        .arg(paths.build_dir.display().to_string());

    match jobs {
        Some(n) => invocation.arg("-j").arg(n.to_string()),
        None => invocation,
    }
}
