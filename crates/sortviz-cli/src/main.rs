//! Sortviz CLI - watch sorting algorithms work, one engine operation at a time.

mod commands;
mod controller;
mod generator;
mod terminal;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortviz")]
#[command(author, version, about = "Sorting algorithm visualizer", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a random array with one algorithm
    Run(commands::run::RunArgs),

    /// List available sorters or show one in detail
    Sorters(commands::sorters::SortersArgs),

    /// Run every sorter on the same array and compare operation counts
    Compare(commands::compare::CompareArgs),

    /// Show or initialize the settings file
    Config(commands::config::ConfigArgs),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing_log::LogTracer::init().ok();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Sorters(args) => commands::sorters::run(args),
        Commands::Compare(args) => commands::compare::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
