//! Propkit CLI - Command-line interface for propkit
//!
//! Usage:
//!   propkit demo [--config <gate.json>]   - Walk the three model entities
//!   propkit budget runway ...             - Months a cushion lasts
//!   propkit budget cushion ...            - Cushion needed for a horizon
//!   propkit groups ...                    - Members common to two groups
//!   propkit convert ...                   - CSV file to JSON file
//!   propkit score ...                     - Weighted total of a score file

use clap::{Parser, Subcommand};

mod commands;

use commands::{BudgetCommand, ConvertCommand, DemoCommand, GroupsCommand, ScoreCommand};

#[derive(Parser)]
#[command(name = "propkit")]
#[command(about = "Propkit - validated everyday-object models and small computations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the container, gate, and vehicle through a short scenario
    Demo(DemoCommand),
    /// Budget arithmetic
    Budget(BudgetCommand),
    /// Members common to two groups
    Groups(GroupsCommand),
    /// Convert a CSV file to a JSON file
    Convert(ConvertCommand),
    /// Weighted total of a JSON score file
    Score(ScoreCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo(cmd) => cmd.run(),
        Commands::Budget(cmd) => cmd.run(),
        Commands::Groups(cmd) => cmd.run(),
        Commands::Convert(cmd) => cmd.run(),
        Commands::Score(cmd) => cmd.run(),
    }
}
