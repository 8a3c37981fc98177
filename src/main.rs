use anyhow::Result;
use clap::Parser;
use podium::cli::{Cli, Commands};
use podium::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            snapshot,
            format,
            output,
            category,
            side_stage,
            config,
        } => commands::rank::run(commands::rank::RankConfig {
            snapshot,
            config,
            category,
            side_stage,
            format,
            output,
        }),
        Commands::Roster {
            snapshot,
            format,
            output,
            config,
        } => commands::roster::run(commands::roster::RosterConfig {
            snapshot,
            config,
            format,
            output,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
