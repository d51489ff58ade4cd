//! # Wikichar
//!
//! A read-only enrichment engine over the Wikidata knowledge graph and
//! Wikipedia: resolve a free-text query or entity ID into a flat
//! biographical record, classified as a real person or fictional character.
//!
//! ## Features
//!
//! - **Search resolution**: free text to classified, deduplicated
//!   candidates with canonical URLs
//! - **Classification**: real / fictional / other via instance-of claims
//!   and fictional indicator properties
//! - **Detail aggregation**: names, summaries, dates (BCE-aware), places,
//!   occupations, nationality, languages, awards, and Commons images, with
//!   layered fallbacks so a usable record always comes back
//! - **Random sampling**: randomized SPARQL batches per kind, backed by a
//!   curated fallback catalog that makes the random path infallible
//! - **Response caching**: bounded LRU cache keyed by deterministic
//!   (endpoint, sorted parameters) serialization
//!
//! ## Architecture
//!
//! ```text
//! caller → Resolver → search / random sampler → classifier (per candidate)
//!                   → detail aggregator → DetailRecord
//!                           ↓
//!                   WikidataClient (keyed API + SPARQL, LRU cache)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use wikichar::{Config, Resolver};
//! use wikichar::cache::ResponseCache;
//! use wikichar::wikidata::WikidataClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let cache = ResponseCache::new(config.cache.capacity);
//!     let client = WikidataClient::new(&config.wikidata, config.request.clone(), cache)?;
//!     let resolver = Resolver::new(client);
//!
//!     let record = resolver.resolve_by_text("Ada Lovelace").await;
//!     println!("{}", serde_json::to_string_pretty(&record)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Bounded LRU cache for raw API responses.
pub mod cache;
/// Configuration management loaded from the environment.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Entity resolution engine: search, classification, details, sampling.
pub mod resolve;
/// Wikidata API/SPARQL client and wire types.
pub mod wikidata;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use resolve::{Candidate, DetailRecord, EntityKind, ResolveStatus, Resolver};
