// file: src/build/artifact.rs
// version: 1.0.0
// guid: fc7bcd89-4e85-4fb6-a6b4-5fcb27a09867

//! Relocation of the generated compilation database

use super::BuildPaths;
use crate::error::BuildError;
use crate::Result;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of moving the artifact into place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub destination: PathBuf,
    /// A previous artifact at the destination was removed first
    pub replaced: bool,
}

/// Move the generated artifact to the top of the build tree.
///
/// An existing file at the destination is removed before the move.
pub fn relocate(paths: &BuildPaths) -> Result<Relocation> {
    if !paths.generated_artifact.is_file() {
        return Err(BuildError::file_not_found(format!(
            "{} (was the project configured with CMAKE_EXPORT_COMPILE_COMMANDS?)",
            paths.generated_artifact.display()
        )));
    }

    let replaced = paths.relocated_artifact.exists();
    if replaced {
        debug!("Removing previous {}", paths.relocated_artifact.display());
        fs::remove_file(&paths.relocated_artifact)?;
    }

    move_file(&paths.generated_artifact, &paths.relocated_artifact)?;
    info!(
        "Moved {} to {}",
        paths.generated_artifact.display(),
        paths.relocated_artifact.display()
    );

    Ok(Relocation {
        destination: paths.relocated_artifact.clone(),
        replaced,
    })
}

fn move_file(from: &std::path::Path, to: &std::path::Path) -> Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    // rename fails across filesystems; fall back to copy and delete
    let options = fs_extra::file::CopyOptions::new();
    fs_extra::file::move_file(from, to, &options).map_err(|e| {
        BuildError::system(format!(
            "Failed to move {} to {}: {}",
            from.display(),
            to.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuildType;
    use crate::config::BuildConfig;
    use tempfile::TempDir;

    fn paths_in(dir: &TempDir, build_type: BuildType) -> BuildPaths {
        let config = BuildConfig {
            build_root: dir.path().join("build"),
            ..BuildConfig::default()
        };
        BuildPaths::new(&config, build_type)
    }

    #[test]
    fn test_relocate_moves_generated_file() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir, BuildType::Debug);
        fs::create_dir_all(&paths.build_dir).unwrap();
        fs::write(&paths.generated_artifact, "[]").unwrap();

        let relocation = relocate(&paths).unwrap();

        assert!(!relocation.replaced);
        assert!(!paths.generated_artifact.exists());
        assert_eq!(fs::read_to_string(&paths.relocated_artifact).unwrap(), "[]");
    }

    #[test]
    fn test_relocate_replaces_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir, BuildType::Release);
        fs::create_dir_all(&paths.build_dir).unwrap();
        fs::write(&paths.relocated_artifact, "old").unwrap();
        fs::write(&paths.generated_artifact, "new").unwrap();

        let relocation = relocate(&paths).unwrap();

        assert!(relocation.replaced);
        assert_eq!(fs::read_to_string(&paths.relocated_artifact).unwrap(), "new");
    }

    #[test]
    fn test_relocate_missing_generated_file_keeps_previous() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir, BuildType::Debug);
        fs::create_dir_all(&paths.build_dir).unwrap();
        fs::write(&paths.relocated_artifact, "old").unwrap();

        let result = relocate(&paths);

        assert!(matches!(result, Err(BuildError::FileNotFound(_))));
        assert_eq!(fs::read_to_string(&paths.relocated_artifact).unwrap(), "old");
    }
}
