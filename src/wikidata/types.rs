use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Wikidata item code for a human being.
pub const ITEM_HUMAN: &str = "Q5";

/// Wikidata item codes whose presence in an instance-of claim marks a
/// fictional character or fictional human.
pub const FICTIONAL_ITEMS: [&str; 4] = ["Q15632617", "Q15632618", "Q95074", "Q4167410"];

/// Instance of
pub const PROP_INSTANCE_OF: &str = "P31";
/// Occupation
pub const PROP_OCCUPATION: &str = "P106";
/// Known for
pub const PROP_KNOWN_FOR: &str = "P737";
/// Date of birth
pub const PROP_BIRTH_DATE: &str = "P569";
/// Date of death
pub const PROP_DEATH_DATE: &str = "P570";
/// Country of citizenship
pub const PROP_CITIZENSHIP: &str = "P27";
/// Image
pub const PROP_IMAGE: &str = "P18";
/// Sex or gender
pub const PROP_GENDER: &str = "P21";
/// Place of birth
pub const PROP_BIRTH_PLACE: &str = "P19";
/// Place of death
pub const PROP_DEATH_PLACE: &str = "P20";
/// Languages spoken, written or signed
pub const PROP_LANGUAGES: &str = "P1412";
/// Award received
pub const PROP_AWARDS: &str = "P166";

/// Properties whose mere presence suggests a fictional character: date of
/// first performance, present in work, part of the series.
pub const FICTIONAL_INDICATOR_PROPS: [&str; 3] = ["P1191", "P1441", "P179"];

/// Response payload of a `wbsearchentities` call.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// One raw hit from entity search. `label` and `description` are absent for
/// entities that lack them in the requested language.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub label: Option<String>,
    pub description: Option<String>,
}

/// Response payload of a `wbgetclaims` call.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimsResponse {
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
}

/// Response payload of a `wbgetentities` call.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitiesResponse {
    #[serde(default)]
    pub entities: HashMap<String, EntityData>,
}

/// Full data for one entity: labels, descriptions, aliases, claims, and
/// sitelinks, each keyed by language (or site) code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityData {
    #[serde(default)]
    pub labels: HashMap<String, LanguageValue>,
    #[serde(default)]
    pub descriptions: HashMap<String, LanguageValue>,
    #[serde(default)]
    pub aliases: HashMap<String, Vec<LanguageValue>>,
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
    #[serde(default)]
    pub sitelinks: HashMap<String, Sitelink>,
}

/// A language-tagged value, as used by labels, descriptions, and aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageValue {
    pub value: String,
}

/// A sitelink to a wiki page, e.g. the `enwiki` article title.
#[derive(Debug, Clone, Deserialize)]
pub struct Sitelink {
    pub title: String,
}

/// A single claim (statement) on an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
    pub mainsnak: Snak,
}

/// The main snak of a claim. `datavalue` is absent for novalue/somevalue
/// snaks, which the aggregator simply skips.
#[derive(Debug, Clone, Deserialize)]
pub struct Snak {
    pub datavalue: Option<DataValue>,
}

/// A snak's data value. The `value` shape varies by datatype (entity
/// reference, time, plain string), so it stays a raw [`Value`] with typed
/// accessors on [`Claim`].
#[derive(Debug, Clone, Deserialize)]
pub struct DataValue {
    pub value: Value,
}

impl Claim {
    /// Referenced entity ID (`{"id": "Q5"}` values), if this claim holds one.
    pub fn entity_id(&self) -> Option<&str> {
        self.mainsnak
            .datavalue
            .as_ref()
            .and_then(|dv| dv.value.get("id"))
            .and_then(Value::as_str)
    }

    /// Point-in-time string (`{"time": "+1889-04-16T00:00:00Z"}` values).
    pub fn time(&self) -> Option<&str> {
        self.mainsnak
            .datavalue
            .as_ref()
            .and_then(|dv| dv.value.get("time"))
            .and_then(Value::as_str)
    }

    /// Plain string value, e.g. a Commons file name on an image claim.
    pub fn string_value(&self) -> Option<&str> {
        self.mainsnak
            .datavalue
            .as_ref()
            .and_then(|dv| dv.value.as_str())
    }
}

/// Response payload of a SPARQL query: rows of variable bindings.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

/// The `results` member of a SPARQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<HashMap<String, SparqlValue>>,
}

/// One bound value in a SPARQL result row.
#[derive(Debug, Clone, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

impl SparqlValue {
    /// Trailing path segment of an entity IRI, i.e. the bare entity ID.
    ///
    /// SPARQL binds items as full IRIs
    /// (`http://www.wikidata.org/entity/Q937`); the keyed API wants `Q937`.
    pub fn entity_id(&self) -> &str {
        self.value.rsplit('/').next().unwrap_or(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claim_entity_id() {
        let claim: Claim = serde_json::from_value(json!({
            "mainsnak": {"datavalue": {"value": {"id": "Q5"}}}
        }))
        .unwrap();
        assert_eq!(claim.entity_id(), Some("Q5"));
        assert_eq!(claim.time(), None);
    }

    #[test]
    fn test_claim_time() {
        let claim: Claim = serde_json::from_value(json!({
            "mainsnak": {"datavalue": {"value": {"time": "+1889-04-16T00:00:00Z"}}}
        }))
        .unwrap();
        assert_eq!(claim.time(), Some("+1889-04-16T00:00:00Z"));
    }

    #[test]
    fn test_claim_without_datavalue() {
        // novalue snak
        let claim: Claim = serde_json::from_value(json!({"mainsnak": {}})).unwrap();
        assert_eq!(claim.entity_id(), None);
        assert_eq!(claim.string_value(), None);
    }

    #[test]
    fn test_claim_string_value() {
        let claim: Claim = serde_json::from_value(json!({
            "mainsnak": {"datavalue": {"value": "Albert Einstein 1921.jpg"}}
        }))
        .unwrap();
        assert_eq!(claim.string_value(), Some("Albert Einstein 1921.jpg"));
    }

    #[test]
    fn test_sparql_value_entity_id() {
        let value = SparqlValue {
            value: "http://www.wikidata.org/entity/Q937".to_string(),
        };
        assert_eq!(value.entity_id(), "Q937");

        let bare = SparqlValue {
            value: "Q937".to_string(),
        };
        assert_eq!(bare.entity_id(), "Q937");
    }
}
