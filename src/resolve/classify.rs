use tracing::{debug, warn};

use super::kind::EntityKind;
use crate::wikidata::{
    ClaimsResponse, WikidataClient, FICTIONAL_INDICATOR_PROPS, FICTIONAL_ITEMS, ITEM_HUMAN,
    PROP_INSTANCE_OF,
};

/// Classify an entity as a real person, a fictional character, or neither.
///
/// Decision order, first match wins:
/// 1. instance-of contains the human item -> real;
/// 2. instance-of intersects the fictional item set -> fictional;
/// 3. any fictional indicator property is present -> fictional;
/// 4. otherwise -> other.
///
/// Claim retrieval failures classify as `Other` rather than propagating:
/// one unreachable entity must not take down a whole search batch.
pub async fn classify(client: &WikidataClient, entity_id: &str) -> EntityKind {
    let claims = match client.entity_claims(entity_id).await {
        Ok(response) => response,
        Err(e) => {
            warn!(entity = %entity_id, error = %e, "Failed to fetch claims, classifying as other");
            return EntityKind::Other;
        }
    };

    let kind = classify_claims(&claims);
    debug!(entity = %entity_id, kind = %kind, "Classified entity");
    kind
}

/// Pure decision table over an already-fetched claim set.
pub(crate) fn classify_claims(claims: &ClaimsResponse) -> EntityKind {
    let instance_of: Vec<&str> = claims
        .claims
        .get(PROP_INSTANCE_OF)
        .map(|list| list.iter().filter_map(|claim| claim.entity_id()).collect())
        .unwrap_or_default();

    if instance_of.contains(&ITEM_HUMAN) {
        return EntityKind::Real;
    }

    if instance_of
        .iter()
        .any(|id| FICTIONAL_ITEMS.contains(id))
    {
        return EntityKind::Fictional;
    }

    if FICTIONAL_INDICATOR_PROPS
        .iter()
        .any(|prop| claims.claims.contains_key(*prop))
    {
        return EntityKind::Fictional;
    }

    EntityKind::Other
}
