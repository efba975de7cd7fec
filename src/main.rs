mod commands;
mod render;
mod session;
mod workbook;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use session::Session;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "rotacal")]
#[command(about = "Turn your shift spreadsheet into calendar events")]
struct Cli {
    /// Path to config.toml (defaults to $ROTACAL_PATH or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the workbook and config without printing events
    Check,
    /// List every event the schedule produces
    Events {
        /// Print the events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print Google Calendar insert payloads
    Payloads {
        /// Write the payloads to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the schedule as an .ics file
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show upcoming dates for each recurring schedule
    Preview {
        /// Occurrences to show per schedule
        #[arg(long, default_value_t = 10)]
        limit: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let session = Session::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check => commands::check::run(&session),
        Commands::Events { json } => commands::events::run(&session, json),
        Commands::Payloads { output } => commands::payloads::run(&session, output.as_deref()),
        Commands::Export { output } => commands::export::run(&session, &output),
        Commands::Preview { limit } => commands::preview::run(&session, limit),
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
