//! Go toolchain command construction.
//!
//! The stages never hard-code command strings; they ask a [`Toolchain`] for
//! fully built [`CommandSpec`]s. Tests assert on the exact arguments and
//! can substitute their own implementation.

use crate::domain::{ProfiledUnit, CANONICAL_PROFILE, INTERMEDIATE_PROFILE_GLOB, MERGED_PROFILE, PROFILE_GRAPH};
use crate::runner::CommandSpec;

pub trait Toolchain {
    /// Benchmark-only run of one unit, writing its CPU profile.
    fn bench(&self, unit: &ProfiledUnit) -> CommandSpec;
    /// Combine every per-unit profile into the merged profile.
    fn merge(&self) -> CommandSpec;
    /// Render the visualization from the canonical profile.
    fn graph(&self) -> CommandSpec;
}

/// The standard `go test` / `go tool pprof` toolchain.
pub struct GoToolchain {
    /// Per-benchmark duration, passed to `go test -benchtime`.
    pub benchtime: String,
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self { benchtime: "10s".to_string() }
    }
}

impl Toolchain for GoToolchain {
    fn bench(&self, unit: &ProfiledUnit) -> CommandSpec {
        CommandSpec::Argv(vec![
            "go".to_string(),
            "test".to_string(),
            format!("./{unit}/..."),
            "-run=^$".to_string(),  // matches no test name, so unit tests are skipped
            "-bench=.".to_string(), // every benchmark
            format!("-benchtime={}", self.benchtime),
            format!("-cpuprofile={}", unit.artifact_name()),
            "-pgo=off".to_string(), // profile the unoptimized build
        ])
    }

    fn merge(&self) -> CommandSpec {
        // Shell-interpreted: the wildcard must expand to every per-unit
        // profile, and pprof's proto output goes through a redirection.
        CommandSpec::Shell(format!(
            "go tool pprof -proto {INTERMEDIATE_PROFILE_GLOB} > {MERGED_PROFILE}"
        ))
    }

    fn graph(&self) -> CommandSpec {
        CommandSpec::Shell(format!("go tool pprof -svg {CANONICAL_PROFILE} > {PROFILE_GRAPH}"))
    }
}
