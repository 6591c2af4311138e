//! Profile merging.

use crate::domain::{PipelineError, Stage};
use crate::runner::CommandRunner;
use crate::toolchain::Toolchain;

/// Combine every per-unit profile into the merged profile.
///
/// The merge command is shell-interpreted so the wildcard expands to all
/// per-unit artifacts. With zero inputs the merge tool's own behavior
/// governs; if it exits zero without writing any output, publication fails
/// with a typed error instead of publishing an empty profile.
pub fn merge_profiles<R: CommandRunner>(
    runner: &mut R,
    toolchain: &impl Toolchain,
) -> Result<(), PipelineError> {
    runner.run(Stage::Merge, &toolchain.merge(), true)?;
    Ok(())
}
