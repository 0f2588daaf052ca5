use anyhow::Result;
use clap::Parser;
use ltvmap::cli::{Cli, Commands};
use ltvmap::commands::{handle_compute, handle_history, HistoryConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { opts, scenario } => handle_compute(opts, scenario),
        Commands::History {
            user,
            format,
            store,
            month,
        } => handle_history(HistoryConfig {
            user,
            format,
            store,
            month,
        }),
    }
}
