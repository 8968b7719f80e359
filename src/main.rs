mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daylog::config::DaylogConfig;

#[derive(Parser)]
#[command(
    name = "daylog",
    version,
    about = "Journal that recalls similar days and judges today's productivity"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write today's entry and get a productivity judgement (default)
    Write,
    /// List all stored entries
    List,
    /// Show the stored entries most similar to some text
    Search {
        /// Text to compare against past entries
        query: String,
        /// Number of entries to show (defaults to retrieval.top_n)
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Check the journal file for entries that would break retrieval
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = DaylogConfig::load()?;

    // Log to stderr so stdout stays the journal transcript.
    let filter = EnvFilter::try_new(&config.general.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Write) {
        Command::Write => cli::write::write(&config).await?,
        Command::List => cli::list::list(&config)?,
        Command::Search { query, top_n } => cli::search::search(&config, &query, top_n).await?,
        Command::Check => cli::check::check(&config)?,
    }

    Ok(())
}
