//! Entity resolution engine.
//!
//! This module turns free-text queries and entity IDs into flat
//! [`DetailRecord`]s:
//! - [`search`]: free text to classified [`Candidate`]s;
//! - [`classify`]: real person / fictional character / other, from
//!   instance-of claims and fictional indicator properties;
//! - [`details`]: one candidate to a normalized record with layered
//!   fallbacks for every field;
//! - [`Resolver`]: the public operations, including random sampling backed
//!   by the curated fallback catalog.

mod classify;
mod dates;
mod details;
mod fallback;
mod kind;
mod random;
mod search;
mod types;

pub use classify::classify;
pub use dates::format_time;
pub use details::details;
pub use fallback::{pick as pick_fallback, FallbackEntry};
pub use kind::EntityKind;
pub use search::search;
pub use types::{article_url, commons_file_url, wikidata_page_url};
pub use types::{Candidate, DetailRecord, ResolveStatus};

use tracing::{info, warn};

use crate::wikidata::WikidataClient;

/// The resolution engine facade consumed by routing layers and the CLI.
pub struct Resolver {
    client: WikidataClient,
}

impl Resolver {
    /// Create a resolver owning the given client.
    pub fn new(client: WikidataClient) -> Self {
        Self { client }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &WikidataClient {
        &self.client
    }

    /// Resolve a free-text query into a record.
    ///
    /// Zero classified candidates yield `not_found`; exactly one delegates
    /// to detail aggregation; two or more surface the full candidate list
    /// as `multiple_results` for the caller to disambiguate. Ambiguity is
    /// never resolved silently by a best-match heuristic.
    pub async fn resolve_by_text(&self, query: &str) -> DetailRecord {
        let query = query.trim();
        if query.is_empty() {
            return DetailRecord::bare(
                ResolveStatus::NotFound,
                "",
                EntityKind::Other,
                "Please enter a search query.",
            );
        }

        let mut candidates = search(&self.client, query).await;

        match candidates.len() {
            0 => {
                info!(query = %query, "No classified candidates");
                DetailRecord::not_found(query)
            }
            1 => {
                let candidate = candidates.remove(0);
                details(&self.client, &candidate).await
            }
            n => {
                info!(query = %query, count = n, "Ambiguous query, surfacing candidates");
                DetailRecord::ambiguous(candidates)
            }
        }
    }

    /// Resolve a known entity ID into a record.
    ///
    /// Classifies the entity first so the record carries a kind, then
    /// aggregates details. Anything short of a `status=ok` record is
    /// reported as `None`.
    pub async fn resolve_by_id(&self, id: &str) -> Option<DetailRecord> {
        let kind = classify(&self.client, id).await;

        let candidate = Candidate {
            id: id.to_string(),
            name: String::new(),
            kind,
            description: String::new(),
            url: wikidata_page_url(id),
        };

        let record = details(&self.client, &candidate).await;
        if record.status == ResolveStatus::Ok {
            Some(record)
        } else {
            warn!(entity = %id, status = record.status.as_str(), "Lookup by ID failed");
            None
        }
    }

    /// Return a random entity of the requested kind.
    ///
    /// Live sampling is advisory: when the SPARQL query fails, returns an
    /// empty batch, or the sampled entity cannot be aggregated, the curated
    /// fallback catalog takes over. The returned record is always
    /// `status=ok` for real and fictional kinds.
    pub async fn random_of_kind(&self, kind: EntityKind) -> DetailRecord {
        if let Some(candidate) = random::sample(&self.client, kind).await {
            let record = details(&self.client, &candidate).await;
            if record.status == ResolveStatus::Ok {
                return record;
            }
            warn!(entity = %candidate.id, "Sampled entity failed aggregation, using catalog");
        }

        let entry = fallback::pick(kind);
        let record = details(&self.client, &entry.to_candidate()).await;
        if record.status == ResolveStatus::Ok {
            record
        } else {
            // Even the live lookup of the catalog entity failed; the entry
            // itself is enough for a minimal ok record.
            entry.to_record()
        }
    }
}
