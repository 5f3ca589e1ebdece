//! CLI frontend for the Sleuth murder mystery game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sleuth",
    about = "Sleuth — question the suspects, find the murderer",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log generation and session details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new case
    Play {
        /// Detective name (prompted for when omitted)
        #[arg(short, long)]
        detective: Option<String>,

        /// Number of suspects to draw from the candidate pool
        #[arg(short, long, default_value_t = sl_core::config::SUSPECT_COUNT)]
        suspects: usize,

        /// Write the final truth log as JSON to this file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Show how to play
    Rules,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            detective,
            suspects,
            export,
        } => commands::play::run(detective.as_deref(), suspects, export.as_deref()),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
