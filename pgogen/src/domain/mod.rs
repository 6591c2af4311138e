//! Domain model for pgogen
//!
//! Core types for the profile pipeline: unit identifiers, deterministic
//! artifact naming, and structured errors.

pub mod errors;
pub mod types;

pub use types::{
    ProfiledUnit, CANONICAL_PROFILE, INTERMEDIATE_PROFILE_GLOB, MERGED_PROFILE, PROFILED_UNITS,
    PROFILE_GRAPH, TEST_BINARY_GLOB,
};

pub use errors::{PipelineError, Stage};
