use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "Contest scoring and ranking engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute per-category standings from a snapshot
    Rank {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rank a single category instead of the whole board
        #[arg(long)]
        category: Option<String>,

        /// Rank the side-stage panels instead of the main board
        #[arg(long, conflicts_with = "category")]
        side_stage: bool,

        /// Configuration file (defaults to podium.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the grouped roster in scoring order
    Roster {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to podium.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create a starter podium.toml with the default category policy
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
