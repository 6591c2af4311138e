//! Structured error types for pgogen
//!
//! Using thiserror for automatic Display implementation and error chaining.
//! Command failures carry the failing stage and the child's own exit status
//! so the binary can propagate it as the process exit code.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage names, for error messages and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Profile,
    Merge,
    Publish,
    Cleanup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Profile => "profile",
            Stage::Merge => "merge",
            Stage::Publish => "publish",
            Stage::Cleanup => "cleanup",
        };
        write!(f, "{name}")
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{stage} command exited with status {status}")]
    CommandFailed { stage: Stage, status: i32 },

    #[error("failed to spawn {stage} command: {source}")]
    SpawnFailed { stage: Stage, source: std::io::Error },

    #[error("merged profile {0} does not exist; the merge produced no output")]
    MissingMergedProfile(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = PipelineError::CommandFailed { stage: Stage::Merge, status: 2 };
        assert_eq!(err.to_string(), "merge command exited with status 2");
    }

    #[test]
    fn test_missing_merged_profile_display() {
        let err = PipelineError::MissingMergedProfile(PathBuf::from("cpuprofile-merged.pprof"));
        assert!(err.to_string().contains("cpuprofile-merged.pprof"));
        assert!(err.to_string().contains("no output"));
    }
}
