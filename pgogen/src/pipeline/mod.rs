//! The profile-generation pipeline.
//!
//! Stages run strictly in order: profile each configured unit, merge the
//! per-unit profiles, publish the canonical profile plus its rendered
//! graph, then remove the intermediates. The first failing stage stops the
//! run — nothing is retried, no stage recovers locally, and cleanup is
//! only reached on full success (an aborted run leaves its intermediates
//! on disk for inspection).

pub mod cleanup;
pub mod merge;
pub mod profile;
pub mod publish;

use std::path::PathBuf;

use log::info;

use crate::domain::{PipelineError, ProfiledUnit, CANONICAL_PROFILE};
use crate::runner::CommandRunner;
use crate::toolchain::Toolchain;

pub struct Pipeline<R, T> {
    workdir: PathBuf,
    runner: R,
    toolchain: T,
    units: Vec<ProfiledUnit>,
}

impl<R: CommandRunner, T: Toolchain> Pipeline<R, T> {
    pub fn new(
        workdir: impl Into<PathBuf>,
        runner: R,
        toolchain: T,
        units: Vec<ProfiledUnit>,
    ) -> Self {
        Self { workdir: workdir.into(), runner, toolchain, units }
    }

    /// Run the whole pipeline to completion.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure: a non-zero external command exit
    /// (carrying that command's status), a missing merged profile, or an
    /// I/O error while copying or deleting artifacts.
    pub fn run(&mut self) -> Result<(), PipelineError> {
        profile::profile_units(&mut self.runner, &self.toolchain, &self.units)?;
        merge::merge_profiles(&mut self.runner, &self.toolchain)?;
        publish::publish_profile(&mut self.runner, &self.toolchain, &self.workdir)?;
        cleanup::remove_intermediates(&self.workdir)?;
        info!("PGO profile ready: {CANONICAL_PROFILE}");
        Ok(())
    }
}
