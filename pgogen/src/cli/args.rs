//! CLI argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pgogen",
    about = "Generate the PGO profile consumed by the build toolchain",
    after_help = "\
Runs the benchmarks of every configured package sequentially, merges their
CPU profiles, and publishes cpuprofile.pprof (plus cpuprofile.svg) in the
current directory. Exits with the failing command's status on error."
)]
pub struct Args {
    /// Benchmark duration per unit, passed to `go test -benchtime`
    #[arg(long, default_value = "10s", value_name = "DURATION")]
    pub benchtime: String,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
