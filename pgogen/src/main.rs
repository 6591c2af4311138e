//! # pgogen - Main Entry Point
//!
//! Runs the full profile-generation pipeline in the current directory and
//! reports success or failure through the process exit status. When an
//! external command fails, that command's own exit status becomes ours, so
//! calling automation can branch on it.

use anyhow::{Context, Result};
use clap::Parser;

use pgogen::cli::Args;
use pgogen::domain::{PipelineError, ProfiledUnit, PROFILED_UNITS};
use pgogen::pipeline::Pipeline;
use pgogen::runner::SystemRunner;
use pgogen::toolchain::GoToolchain;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::CommandFailed { status, .. }) => *status,
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let workdir = std::env::current_dir().context("Failed to resolve working directory")?;
    let units: Vec<ProfiledUnit> = PROFILED_UNITS.iter().copied().map(ProfiledUnit::new).collect();

    if !args.quiet {
        println!("pgogen v{}", env!("CARGO_PKG_VERSION"));
        println!("units: {}", units.len());
        println!("benchtime: {}", args.benchtime);
    }

    let runner = SystemRunner::new(&workdir);
    let toolchain = GoToolchain { benchtime: args.benchtime };

    Pipeline::new(workdir, runner, toolchain, units).run()?;
    Ok(())
}
