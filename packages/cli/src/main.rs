mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, export, fill, CheckArgs, ExportArgs, FillArgs};
use tracing_subscriber::EnvFilter;

/// Formdoc CLI - fillable template documents
#[derive(Parser, Debug)]
#[command(name = "formdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a document file and re-export it in canonical form
    Export(ExportArgs),

    /// Validate a document file and report its contents
    Check(CheckArgs),

    /// Fill a document with values and print the preview
    Fill(FillArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Export(args) => export::run(args),
        Command::Check(args) => check::run(args),
        Command::Fill(args) => fill::run(args),
    };

    if let Err(error) = result {
        eprintln!("{} {}", "error:".red().bold(), error);
        std::process::exit(1);
    }
}
