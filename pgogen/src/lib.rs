//! # pgogen — PGO profile generation
//!
//! Automates the production of the profile-guided-optimization profile the
//! build toolchain reads on subsequent builds. The pipeline orchestrates
//! pre-existing external tools; it owns only command sequencing,
//! deterministic artifact naming, publication, and cleanup.
//!
//! ```text
//! profile ──▶ merge ──▶ publish ──▶ cleanup
//!   │           │          │           │
//!   │           │          │           └─ rm cpuprofile-*.pprof, *.test
//!   │           │          ├─ cpuprofile.pprof (canonical, byte copy)
//!   │           │          └─ cpuprofile.svg   (rendered graph)
//!   │           └─ cpuprofile-merged.pprof
//!   └─ cpuprofile-<unit>.pprof, one per configured package
//! ```
//!
//! Execution is single-threaded and fully sequential: profiled benchmarks
//! need exclusive use of the CPU, so units are never run concurrently. Any
//! external command failure aborts the run before later stages; cleanup is
//! only reached on full success.
//!
//! ## Module Structure
//!
//! - [`domain`]: unit identifiers, artifact naming, typed pipeline errors
//! - [`runner`]: blocking external command execution (the test seam)
//! - [`toolchain`]: construction of the `go test` / `go tool pprof` commands
//! - [`pipeline`]: the four stages and their sequential driver
//! - [`cli`]: command-line argument parsing

pub mod cli;
pub mod domain;
pub mod pipeline;
pub mod runner;
pub mod toolchain;
