//! ttt - Tic-Tac-Toe against a minimax / alpha-beta opponent
//!
//! Subcommands:
//! - `play`: interactive game in the terminal
//! - `analyze`: score a position with every search strategy

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe against a searching computer opponent", long_about = None)]
struct Cli {
    /// Log search details to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(ttt_minimax::cli::commands::play::PlayArgs),

    /// Analyze a position for the computer
    Analyze(ttt_minimax::cli::commands::analyze::AnalyzeArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => ttt_minimax::cli::commands::play::execute(args),
        Commands::Analyze(args) => ttt_minimax::cli::commands::analyze::execute(args),
    }
}
