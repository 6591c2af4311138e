//! Intermediate artifact removal.

use std::fs;
use std::path::Path;

use log::info;

use crate::domain::{PipelineError, INTERMEDIATE_PROFILE_GLOB, TEST_BINARY_GLOB};

/// Remove every per-run intermediate from `workdir`: per-unit profiles, the
/// merged profile, and the `*.test` binaries the benchmark runs leave
/// behind. The canonical profile, its graph, and unrelated files are
/// untouched.
pub fn remove_intermediates(workdir: &Path) -> Result<(), PipelineError> {
    for pattern in [INTERMEDIATE_PROFILE_GLOB, TEST_BINARY_GLOB] {
        let full = workdir.join(pattern);
        for entry in glob::glob(&full.to_string_lossy())? {
            let path = entry.map_err(glob::GlobError::into_error)?;
            if path.is_file() {
                info!("removing {}", path.display());
                fs::remove_file(&path)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_removes_intermediates_and_keeps_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = touch(dir.path(), "cpuprofile.pprof");
        let per_unit = touch(dir.path(), "cpuprofile-cmd__server.pprof");
        let merged = touch(dir.path(), "cpuprofile-merged.pprof");
        let test_bin = touch(dir.path(), "server.test");
        let unrelated = touch(dir.path(), "important.txt");
        let graph = touch(dir.path(), "cpuprofile.svg");

        remove_intermediates(dir.path()).unwrap();

        assert!(!per_unit.exists());
        assert!(!merged.exists());
        assert!(!test_bin.exists());
        assert!(canonical.exists());
        assert!(graph.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_empty_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        remove_intermediates(dir.path()).unwrap();
    }
}
