use tracing::{debug, info, warn};

use super::classify::classify;
use super::kind::EntityKind;
use super::types::{wikidata_page_url, Candidate};
use crate::wikidata::WikidataClient;

/// Search result cap. Generous on purpose: the classifier filter discards
/// most hits, and a small cap would hide valid people behind pop-culture
/// noise.
pub(crate) const SEARCH_LIMIT: usize = 20;

/// Placeholder shown when the upstream entity has no label in the
/// configured language.
pub(crate) const UNNAMED: &str = "Unnamed";

/// Resolve free text into classified candidates.
///
/// Only entities classified as real or fictional survive the filter; the
/// relevance order of the upstream search is preserved, never re-ranked.
/// A single candidate that fails to classify or decode is skipped so it
/// cannot suppress the rest of the batch.
pub async fn search(client: &WikidataClient, query: &str) -> Vec<Candidate> {
    if query.trim().is_empty() {
        warn!("Empty search query");
        return Vec::new();
    }

    let response = match client.search_entities(query.trim(), SEARCH_LIMIT).await {
        Ok(response) => response,
        Err(e) => {
            warn!(query = %query, error = %e, "Entity search failed");
            return Vec::new();
        }
    };

    let mut candidates = Vec::new();
    for hit in response.search {
        let kind = classify(client, &hit.id).await;
        match kind {
            EntityKind::Real | EntityKind::Fictional => {
                let url = wikidata_page_url(&hit.id);
                candidates.push(Candidate {
                    name: hit.label.unwrap_or_else(|| UNNAMED.to_string()),
                    description: hit.description.unwrap_or_default(),
                    kind,
                    id: hit.id,
                    url,
                });
            }
            EntityKind::Other => {
                debug!(entity = %hit.id, "Skipping unclassified search hit");
            }
        }
    }

    info!(query = %query, count = candidates.len(), "Search produced candidates");
    candidates
}
