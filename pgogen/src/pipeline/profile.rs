//! Per-unit benchmark profiling.

use log::info;

use crate::domain::{PipelineError, ProfiledUnit, Stage};
use crate::runner::CommandRunner;
use crate::toolchain::Toolchain;

/// Profile every configured unit, strictly in configured order.
///
/// Units run one at a time: CPU-time sample attribution is only accurate
/// while a benchmark has the machine to itself, so two units must never be
/// profiled concurrently. A failing unit aborts the whole run; profiles
/// already written stay on disk.
///
/// An empty unit list is legal and produces no artifacts.
pub fn profile_units<R: CommandRunner>(
    runner: &mut R,
    toolchain: &impl Toolchain,
    units: &[ProfiledUnit],
) -> Result<(), PipelineError> {
    for unit in units {
        info!("profiling {unit} -> {}", unit.artifact_name());
        runner.run(Stage::Profile, &toolchain.bench(unit), true)?;
    }
    Ok(())
}
