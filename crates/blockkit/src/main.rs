//! Blockkit CLI - block-kit span tokenizer.
//!
//! Provides commands for:
//! - `parse`: Split markdown into spans and print them
//! - `typefaces`: List typefaces referenced by styled spans

mod commands;
mod error;
mod input;
mod output;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ParseArgs, TypefacesArgs};
use output::Output;

/// Blockkit - block-kit span tokenizer.
#[derive(Parser)]
#[command(name = "blockkit", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split markdown into spans.
    Parse(ParseArgs),
    /// List typefaces used by styled spans.
    Typefaces(TypefacesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (errors only when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Parse(args) => args.execute(),
        Commands::Typefaces(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
