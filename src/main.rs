use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wikichar::cache::ResponseCache;
use wikichar::config::{Config, LogFormat};
use wikichar::wikidata::WikidataClient;
use wikichar::{EntityKind, Resolver};

/// Resolve people and fictional characters against Wikidata.
#[derive(Parser)]
#[command(name = "wikichar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a free-text query
    Search {
        /// Query text, e.g. a person or character name
        query: String,
    },
    /// Resolve a Wikidata entity ID, e.g. Q937
    Entity {
        /// Entity identifier
        id: String,
    },
    /// Fetch a random entity of a kind ("real" or "fictional")
    Random {
        /// Entity kind
        kind: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        language = %config.wikidata.language,
        "Wikichar starting..."
    );

    let cache = ResponseCache::new(config.cache.capacity);
    let client = match WikidataClient::new(&config.wikidata, config.request.clone(), cache) {
        Ok(c) => {
            info!(api_url = %config.wikidata.api_url, "Wikidata client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize Wikidata client");
            return Err(e.into());
        }
    };
    let resolver = Resolver::new(client);

    match cli.command {
        Command::Search { query } => {
            let record = resolver.resolve_by_text(&query).await;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Entity { id } => match resolver.resolve_by_id(&id).await {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => {
                eprintln!("No entity found for ID {}", id);
                std::process::exit(1);
            }
        },
        Command::Random { kind } => {
            let kind = match EntityKind::from_str(&kind) {
                Ok(kind @ (EntityKind::Real | EntityKind::Fictional)) => kind,
                _ => {
                    eprintln!("Kind must be \"real\" or \"fictional\"");
                    std::process::exit(1);
                }
            };
            let record = resolver.random_of_kind(kind).await;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
