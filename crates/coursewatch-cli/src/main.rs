//! coursewatch CLI
//!
//! Watches a Moodle course and posts added/removed activities to Telegram.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "coursewatch", version)]
#[command(about = "Report changes to a Moodle course's activity list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one watch cycle: fetch, diff, notify, record
    Run(commands::run::RunArgs),
    /// Diff two snapshot files offline
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
