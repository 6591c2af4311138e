//! External command execution.
//!
//! Everything the pipeline does happens through pre-existing external tools
//! (`go test`, `go tool pprof`). `CommandRunner` is the seam between the
//! stages and those tools: the real implementation spawns child processes,
//! tests substitute a recording fake.

use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::domain::{PipelineError, Stage};

/// A fully constructed external command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// Argument vector, executed directly. No shell metacharacter
    /// interpretation; preferred wherever possible.
    Argv(Vec<String>),
    /// Single string handed to `sh -c`. Required when the command needs
    /// output redirection or wildcard expansion.
    Shell(String),
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandSpec::Argv(argv) => write!(f, "{}", argv.join(" ")),
            CommandSpec::Shell(line) => write!(f, "sh -c '{line}'"),
        }
    }
}

/// Blocking execution of one external command.
pub trait CommandRunner {
    /// Run `spec` to completion and return its exit status. Standard
    /// streams are inherited so the tool's diagnostics reach the operator
    /// verbatim.
    ///
    /// With `enforce_success` set, a non-zero exit becomes
    /// [`PipelineError::CommandFailed`] carrying the child's own status;
    /// otherwise the status is returned for the caller to inspect. There is
    /// no retry and no timeout: a started command runs until it terminates.
    fn run(
        &mut self,
        stage: Stage,
        spec: &CommandSpec,
        enforce_success: bool,
    ) -> Result<i32, PipelineError>;
}

/// Runs commands as real child processes in a fixed working directory.
pub struct SystemRunner {
    workdir: PathBuf,
}

impl SystemRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }

    fn command_for(&self, stage: Stage, spec: &CommandSpec) -> Result<Command, PipelineError> {
        let mut cmd = match spec {
            CommandSpec::Argv(argv) => {
                let Some(program) = argv.first() else {
                    return Err(PipelineError::SpawnFailed {
                        stage,
                        source: std::io::Error::new(
                            std::io::ErrorKind::InvalidInput,
                            "empty argument vector",
                        ),
                    });
                };
                let mut cmd = Command::new(program);
                cmd.args(&argv[1..]);
                cmd
            }
            CommandSpec::Shell(line) => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(line);
                cmd
            }
        };
        cmd.current_dir(&self.workdir);
        Ok(cmd)
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &mut self,
        stage: Stage,
        spec: &CommandSpec,
        enforce_success: bool,
    ) -> Result<i32, PipelineError> {
        info!("{stage}: {spec}");
        let status = self
            .command_for(stage, spec)?
            .status()
            .map_err(|source| PipelineError::SpawnFailed { stage, source })?;

        // A signal-terminated child has no exit code; report it as 1.
        let code = status.code().unwrap_or(1);
        if enforce_success && !status.success() {
            return Err(PipelineError::CommandFailed { stage, status: code });
        }
        Ok(code)
    }
}
