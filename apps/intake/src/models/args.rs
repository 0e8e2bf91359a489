//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mymove-intake")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Replays orders intake scenarios and prints the resulting form state")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON). `MYMOVE__*` variables override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a scenario's field changes and print the form snapshot as JSON
    Replay {
        /// Scenario file
        scenario: PathBuf,
        /// Enable the unaccompanied baggage flag
        #[arg(long)]
        ub: bool,
        /// Enable the Alaska orders types flag
        #[arg(long)]
        alaska: bool,
    },
    /// Print the rank options of a branch of service as JSON
    Ranks {
        /// Branch, e.g. ARMY or AIR_FORCE
        affiliation: String,
    },
}
