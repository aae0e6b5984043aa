//! Agenda CLI - interactive personal contact book

use std::io;

use agenda::{AgendaConfig, Shell, SqliteStore};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(version)]
#[command(about = "Personal contact book backed by a local SQLite file")]
#[command(long_about = r#"
Agenda opens an interactive menu to manage your contacts:
  1 - Add contact
  2 - List contacts
  3 - Search contact by name
  4 - Remove contact by ID
  5 - Exit

Contacts are stored in ./agenda.db in the current working directory.
"#)]
struct Cli {
    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps it out of the menu
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = AgendaConfig::default();
    tracing::info!("Using contact database {:?}", config.database());

    let store = SqliteStore::new(config.database());
    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}
