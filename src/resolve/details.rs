use std::collections::HashMap;

use tracing::{info, warn};

use super::dates::format_time;
use super::kind::EntityKind;
use super::types::{
    article_url, commons_file_url, wikidata_page_url, Candidate, DetailRecord, ResolveStatus,
};
use crate::wikidata::{
    EntityData, WikidataClient, PROP_AWARDS, PROP_BIRTH_DATE, PROP_BIRTH_PLACE, PROP_CITIZENSHIP,
    PROP_DEATH_DATE, PROP_DEATH_PLACE, PROP_GENDER, PROP_IMAGE, PROP_KNOWN_FOR, PROP_LANGUAGES,
    PROP_OCCUPATION,
};

/// Maximum number of image URLs carried on a record.
const MAX_IMAGES: usize = 4;

/// Aggregate the full claim set of one candidate into a [`DetailRecord`].
///
/// Every failure past this point is soft: the caller gets a `status=error`
/// record with the best-known name, never a hard fault.
pub async fn details(client: &WikidataClient, candidate: &Candidate) -> DetailRecord {
    let response = match client
        .entities(
            &[candidate.id.as_str()],
            "labels|descriptions|claims|sitelinks|aliases",
        )
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(entity = %candidate.id, error = %e, "Entity fetch failed");
            return DetailRecord::soft_error(best_name(candidate), candidate.kind);
        }
    };

    let Some(entity) = response.entities.get(&candidate.id) else {
        warn!(entity = %candidate.id, "Entity missing from response");
        return DetailRecord::soft_error(best_name(candidate), candidate.kind);
    };

    let lang = client.language();
    let name = resolve_name(entity, candidate, lang);

    // One batched label lookup covers every entity-valued property.
    let labels = fetch_referenced_labels(client, entity).await;

    let occupation = joined_labels(entity, PROP_OCCUPATION, &labels);
    let known_for = joined_labels(entity, PROP_KNOWN_FOR, &labels);
    let nationality = joined_labels(entity, PROP_CITIZENSHIP, &labels);
    let languages = joined_labels(entity, PROP_LANGUAGES, &labels);
    let awards = joined_labels(entity, PROP_AWARDS, &labels);
    let gender = first_label(entity, PROP_GENDER, &labels);
    let place_of_birth = first_label(entity, PROP_BIRTH_PLACE, &labels);
    let place_of_death = first_label(entity, PROP_DEATH_PLACE, &labels);

    let summary = resolve_summary(
        entity,
        lang,
        &name,
        candidate.kind,
        occupation.as_deref(),
        known_for.as_deref(),
    );

    let url = entity
        .sitelinks
        .get(&format!("{}wiki", lang))
        .map(|link| article_url(lang, &link.title))
        .unwrap_or_else(|| wikidata_page_url(&candidate.id));

    let images: Vec<String> = entity
        .claims
        .get(PROP_IMAGE)
        .map(|claims| {
            claims
                .iter()
                .filter_map(|claim| claim.string_value())
                .map(commons_file_url)
                .take(MAX_IMAGES)
                .collect()
        })
        .unwrap_or_default();

    info!(entity = %candidate.id, name = %name, "Aggregated entity details");

    let mut record = DetailRecord::bare(ResolveStatus::Ok, name, candidate.kind, summary);
    record.url = url;
    record.wikidata_id = candidate.id.clone();
    record.occupation = occupation;
    record.birth_date = claim_date(entity, PROP_BIRTH_DATE);
    record.death_date = claim_date(entity, PROP_DEATH_DATE);
    record.nationality = nationality;
    record.known_for = known_for;
    record.images = images;
    record.gender = gender;
    record.place_of_birth = place_of_birth;
    record.place_of_death = place_of_death;
    record.languages = languages;
    record.awards = awards;
    record
}

fn best_name(candidate: &Candidate) -> &str {
    if candidate.name.is_empty() {
        &candidate.id
    } else {
        &candidate.name
    }
}

/// Name resolution order: localized label, first localized alias, the name
/// the candidate already carried.
fn resolve_name(entity: &EntityData, candidate: &Candidate, lang: &str) -> String {
    if let Some(label) = entity.labels.get(lang) {
        return label.value.clone();
    }
    if let Some(alias) = entity.aliases.get(lang).and_then(|list| list.first()) {
        return alias.value.clone();
    }
    best_name(candidate).to_string()
}

/// Summary resolution order: localized description, a sentence synthesized
/// from occupation and known-for, then a generic per-kind template. Never
/// empty.
fn resolve_summary(
    entity: &EntityData,
    lang: &str,
    name: &str,
    kind: EntityKind,
    occupation: Option<&str>,
    known_for: Option<&str>,
) -> String {
    if let Some(description) = entity.descriptions.get(lang) {
        return description.value.clone();
    }

    let mut parts = Vec::new();
    if let Some(occupation) = occupation {
        parts.push(format!("{} - {}", name, occupation));
    }
    if let Some(known_for) = known_for {
        parts.push(format!("known for {}", known_for));
    }
    if !parts.is_empty() {
        return parts.join(". ");
    }

    match kind {
        EntityKind::Real => format!("{} - historical figure", name),
        EntityKind::Fictional => format!("{} - fictional character", name),
        EntityKind::Other => format!("{} - encyclopedia entry", name),
    }
}

/// Entity IDs referenced by one property's claims, in claim order.
fn referenced_ids<'a>(entity: &'a EntityData, prop: &str) -> Vec<&'a str> {
    entity
        .claims
        .get(prop)
        .map(|claims| claims.iter().filter_map(|claim| claim.entity_id()).collect())
        .unwrap_or_default()
}

/// Resolve labels for every entity referenced by the display properties in
/// a single `wbgetentities` call. Lookup failures degrade to an empty map,
/// which simply omits the affected fields.
async fn fetch_referenced_labels(
    client: &WikidataClient,
    entity: &EntityData,
) -> HashMap<String, String> {
    let mut ids: Vec<&str> = Vec::new();
    for prop in [
        PROP_OCCUPATION,
        PROP_KNOWN_FOR,
        PROP_CITIZENSHIP,
        PROP_LANGUAGES,
        PROP_AWARDS,
        PROP_GENDER,
        PROP_BIRTH_PLACE,
        PROP_DEATH_PLACE,
    ] {
        for id in referenced_ids(entity, prop) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    if ids.is_empty() {
        return HashMap::new();
    }

    let response = match client.entities(&ids, "labels").await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Label lookup failed, omitting labeled fields");
            return HashMap::new();
        }
    };

    let lang = client.language();
    response
        .entities
        .iter()
        .filter_map(|(id, data)| {
            data.labels
                .get(lang)
                .map(|label| (id.clone(), label.value.clone()))
        })
        .collect()
}

/// All labels of a property's referenced entities joined with `", "`, or
/// `None` when the property is absent or nothing resolved.
fn joined_labels(
    entity: &EntityData,
    prop: &str,
    labels: &HashMap<String, String>,
) -> Option<String> {
    let resolved: Vec<&str> = referenced_ids(entity, prop)
        .into_iter()
        .filter_map(|id| labels.get(id).map(String::as_str))
        .collect();

    if resolved.is_empty() {
        None
    } else {
        Some(resolved.join(", "))
    }
}

/// Label of the first referenced entity only (gender, places).
fn first_label(
    entity: &EntityData,
    prop: &str,
    labels: &HashMap<String, String>,
) -> Option<String> {
    referenced_ids(entity, prop)
        .first()
        .and_then(|id| labels.get(*id))
        .cloned()
}

/// Formatted date from the first claim of a time-valued property.
fn claim_date(entity: &EntityData, prop: &str) -> Option<String> {
    entity
        .claims
        .get(prop)
        .and_then(|claims| claims.first())
        .and_then(|claim| claim.time())
        .and_then(format_time)
}
