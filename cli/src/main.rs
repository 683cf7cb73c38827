//! minidb CLI - drives the engine through the connector and renders the
//! decoded records.
//!
//! The engine executable is configured through the environment
//! (`MINIDB_ENGINE`), never compiled in, so the same binary works against any
//! engine build.

mod config;

use crate::config::Config;
use clap::{Parser, Subcommand};
use minidb_connector::{Connector, Content};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minidb", version, about = "Client for the minidb engine")]
struct Cli {
    /// Database to operate on (falls back to MINIDB_DATABASE)
    #[arg(short, long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert a JSON document into the database
    Insert {
        /// The document, passed to the engine as a single argument
        json: String,
    },
    /// List every record in the database
    Select {
        /// Print the engine's console output without decoding it
        #[arg(long)]
        raw: bool,
    },
}

fn main() {
    // Logs go to stderr; stdout carries only engine output and records.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minidb=warn,minidb_connector=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    if let Err(err) = run() {
        // Engine diagnostics are shown verbatim, not paraphrased.
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let database = cli
        .database
        .or(config.database)
        .ok_or("no database given: pass --database or set MINIDB_DATABASE")?;

    let db = Connector::new(&config.engine_path, database);

    match cli.command {
        Command::Insert { json } => {
            let ack = db.insert_raw(json)?;
            println!("{ack}");
        }
        Command::Select { raw: true } => {
            print!("{}", db.select_raw()?);
        }
        Command::Select { raw: false } => {
            let records = db.select()?;
            tracing::debug!(count = records.len(), "decoded listing");

            for (idx, record) in records.iter().enumerate() {
                println!("[{}] {}", idx + 1, record.filename);
                match &record.content {
                    Content::Json(value) => println!("    {value}"),
                    Content::Raw(text) => {
                        for line in text.lines() {
                            println!("    (raw) {line}");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
