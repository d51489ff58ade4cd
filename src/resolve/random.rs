use rand::seq::SliceRandom;
use tracing::{info, warn};

use super::kind::EntityKind;
use super::types::{wikidata_page_url, Candidate};
use crate::wikidata::{WikidataClient, FICTIONAL_ITEMS, ITEM_HUMAN};

/// Batch size for randomized SPARQL sampling. One query returns several
/// labeled entities and the final pick happens locally, which amortizes the
/// expensive randomized ordering upstream and tolerates bad single entries.
const SAMPLE_LIMIT: usize = 10;

/// Sample one random entity of the requested kind.
///
/// Returns `None` for kinds outside real/fictional, on SPARQL failure, or
/// on an empty batch. The decision to fall back to the curated catalog is
/// owned by the orchestrating [`Resolver`](super::Resolver), not here.
pub async fn sample(client: &WikidataClient, kind: EntityKind) -> Option<Candidate> {
    let query = match build_query(kind, client.language()) {
        Some(query) => query,
        None => {
            warn!(kind = %kind, "Random sampling rejects this kind");
            return None;
        }
    };

    let response = match client.sparql_bindings(&query).await {
        Ok(response) => response,
        Err(e) => {
            warn!(kind = %kind, error = %e, "Random SPARQL query failed");
            return None;
        }
    };

    let bindings = response.results.bindings;
    if bindings.is_empty() {
        warn!(kind = %kind, "Random SPARQL query returned no bindings");
        return None;
    }

    let row = bindings.choose(&mut rand::thread_rng())?;
    let id = row.get("item")?.entity_id().to_string();
    let name = row.get("itemLabel")?.value.clone();

    info!(entity = %id, name = %name, kind = %kind, "Sampled random entity");

    Some(Candidate {
        url: wikidata_page_url(&id),
        id,
        name,
        kind,
        description: String::new(),
    })
}

/// Build the randomized sampling query for a kind. `Other` has no query.
fn build_query(kind: EntityKind, language: &str) -> Option<String> {
    let type_clause = match kind {
        EntityKind::Real => format!("?item wdt:P31 wd:{} .", ITEM_HUMAN),
        EntityKind::Fictional => {
            let values = FICTIONAL_ITEMS
                .iter()
                .map(|item| format!("wd:{}", item))
                .collect::<Vec<_>>()
                .join(" ");
            format!("?item wdt:P31 ?type .\n  VALUES ?type {{ {} }}", values)
        }
        EntityKind::Other => return None,
    };

    Some(format!(
        "SELECT ?item ?itemLabel WHERE {{\n  \
         {}\n  \
         SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"{},en\". }}\n  \
         ?item rdfs:label ?itemLabel .\n  \
         FILTER(LANG(?itemLabel) = \"{}\")\n\
         }}\n\
         ORDER BY RAND()\n\
         LIMIT {}",
        type_clause, language, language, SAMPLE_LIMIT
    ))
}
