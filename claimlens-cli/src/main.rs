//! claimlens command-line entry point

use clap::Parser;
use claimlens_cli::commands::Commands;

/// Sentence segmentation and fact-check evaluation toolkit
#[derive(Debug, Parser)]
#[command(name = "claimlens", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
