//! Canonical profile publication.

use std::fs;
use std::path::Path;

use log::info;

use crate::domain::{PipelineError, Stage, CANONICAL_PROFILE, MERGED_PROFILE};
use crate::runner::CommandRunner;
use crate::toolchain::Toolchain;

/// Promote the merged profile to the canonical path and render its graph.
///
/// The copy is byte-for-byte (pprof is a binary format) and fully replaces
/// any previous canonical profile. The graph render runs second; when it
/// fails, the canonical profile has already been published and is not
/// rolled back, but the run still reports the failure.
pub fn publish_profile<R: CommandRunner>(
    runner: &mut R,
    toolchain: &impl Toolchain,
    workdir: &Path,
) -> Result<(), PipelineError> {
    let merged = workdir.join(MERGED_PROFILE);
    if !merged.is_file() {
        return Err(PipelineError::MissingMergedProfile(merged));
    }

    let bytes = fs::read(&merged)?;
    fs::write(workdir.join(CANONICAL_PROFILE), bytes)?;
    info!("published {CANONICAL_PROFILE}");

    runner.run(Stage::Publish, &toolchain.graph(), true)?;
    Ok(())
}
