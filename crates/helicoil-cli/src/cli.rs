use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "helicoil - measure helix rotation angles and backbone geometry from coordinate traces.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the helix rotation angle (omega) profile of a coordinate trace.
    Omega(OmegaArgs),
    /// Compute per-line distances from a trace of coordinate pairs.
    Distances(DistancesArgs),
}

/// Arguments for the `omega` subcommand.
#[derive(Args, Debug)]
pub struct OmegaArgs {
    /// Path to the coordinate trace (three numbers per line, blank line for
    /// a missing position). Reads standard input when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to a TOML file with analysis parameters.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the root-finder tolerance (radians) from the config file.
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Drop this many positions from both ends of the trace before
    /// windowing (end residues of a helix are the least trustworthy).
    #[arg(
        long,
        value_name = "INT",
        conflicts_with_all = ["truncate_start", "truncate_end"]
    )]
    pub truncate: Option<usize>,

    /// Drop this many leading positions before windowing.
    #[arg(long, value_name = "INT")]
    pub truncate_start: Option<usize>,

    /// Drop this many trailing positions before windowing.
    #[arg(long, value_name = "INT")]
    pub truncate_end: Option<usize>,

    /// Print angles in radians instead of degrees.
    #[arg(long)]
    pub radians: bool,
}

/// Arguments for the `distances` subcommand.
#[derive(Args, Debug)]
pub struct DistancesArgs {
    /// Path to the pair trace (six numbers per line, blank line for a
    /// missing pair). Reads standard input when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}
