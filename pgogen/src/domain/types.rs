//! Unit identifiers and artifact naming.

use std::fmt;

/// Canonical profile filename; `go build` picks it up on subsequent builds.
pub const CANONICAL_PROFILE: &str = "cpuprofile.pprof";

/// Output of the merge stage, removed again during cleanup.
pub const MERGED_PROFILE: &str = "cpuprofile-merged.pprof";

/// Rendered call graph derived from the canonical profile. Informational
/// only, never read by the build.
pub const PROFILE_GRAPH: &str = "cpuprofile.svg";

/// Matches every per-run intermediate profile (per-unit and merged) but not
/// the canonical `cpuprofile.pprof` — the dash is load-bearing.
pub const INTERMEDIATE_PROFILE_GLOB: &str = "cpuprofile-*.pprof";

/// Matches the compiled test binaries `go test` leaves in the working
/// directory after a profiled benchmark run.
pub const TEST_BINARY_GLOB: &str = "*.test";

/// Packages exercised for the PGO profile, in execution order. Chosen for
/// benchmark coverage of the request hot path.
pub const PROFILED_UNITS: &[&str] =
    &["cmd/server", "internal/adapters/inbound", "internal/adapters/outbound"];

/// One benchmarkable package, identified by its slash-delimited path
/// relative to the module root (e.g. `cmd/server`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfiledUnit(pub String);

impl ProfiledUnit {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Filename for this unit's CPU profile. Every path separator (either
    /// direction) becomes `__`, so identifiers that differ after the
    /// substitution map to distinct filenames.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        let safe = self.0.replace(['/', '\\'], "__");
        format!("cpuprofile-{safe}.pprof")
    }
}

impl fmt::Display for ProfiledUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
