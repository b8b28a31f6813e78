mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    init, list, markers, shortcodes, InitArgs, ListArgs, MarkersArgs, ShortcodesArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Folio CLI - paragraph formatting and list markers from the command line
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default folio.config.json
    Init(InitArgs),

    /// Print list markers for a style and depth
    Markers(MarkersArgs),

    /// Format lines as a list and print their markers
    List(ListArgs),

    /// Rewrite shortcodes in text
    Shortcodes(ShortcodesArgs),
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Markers(args) => markers(args, &Config::load(&cwd)?),
        Command::List(args) => list(args, &Config::load(&cwd)?),
        Command::Shortcodes(args) => shortcodes(args, &Config::load(&cwd)?),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
