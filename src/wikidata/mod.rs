//! Wikidata remote query client and wire types.
//!
//! Two upstream surfaces are covered:
//! - the keyed-action API (`w/api.php`) for entity search, claims, and
//!   batched entity/label lookups, behind an LRU response cache;
//! - the SPARQL endpoint for randomized sampling queries, uncached.

mod client;
mod types;

pub use client::WikidataClient;
pub use types::*;
