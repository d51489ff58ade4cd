use serde::{Deserialize, Serialize};

use super::kind::EntityKind;

/// A classified entity-search hit, ready for detail aggregation or for
/// display in a disambiguation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque knowledge-graph identifier, e.g. `Q937`.
    pub id: String,
    /// Display name; a placeholder when the upstream label is absent.
    pub name: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub description: String,
    /// Canonical Wikidata page URL for the entity.
    pub url: String,
}

/// Terminal status of a resolution call.
///
/// `NotFound` and `MultipleResults` are successful-but-inconclusive
/// outcomes, not errors; `Error` marks a soft aggregation failure after a
/// candidate was already identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStatus {
    Ok,
    NotFound,
    MultipleResults,
    Error,
}

impl ResolveStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveStatus::Ok => "ok",
            ResolveStatus::NotFound => "not_found",
            ResolveStatus::MultipleResults => "multiple_results",
            ResolveStatus::Error => "error",
        }
    }
}

/// Flat, display-ready record for one resolved entity.
///
/// Optional fields are omitted entirely when the underlying claim is
/// absent; they are never empty-with-meaning. Built once per resolution
/// call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRecord {
    pub status: ResolveStatus,
    pub name: String,
    pub kind: EntityKind,
    /// Human-readable summary; never empty on a `status=ok` record.
    pub summary: String,
    /// Wikipedia article URL, or the Wikidata page as a fallback.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wikidata_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_for: Option<String>,
    /// Commons file URLs, at most four, in claim order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    /// Populated only on `multiple_results`, for caller-side disambiguation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
}

impl DetailRecord {
    /// Skeleton record carrying only status, identity, and summary.
    pub(crate) fn bare(
        status: ResolveStatus,
        name: impl Into<String>,
        kind: EntityKind,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            status,
            name: name.into(),
            kind,
            summary: summary.into(),
            url: String::new(),
            wikidata_id: String::new(),
            occupation: None,
            birth_date: None,
            death_date: None,
            nationality: None,
            known_for: None,
            images: Vec::new(),
            gender: None,
            place_of_birth: None,
            place_of_death: None,
            languages: None,
            awards: None,
            candidates: Vec::new(),
        }
    }

    /// Terminal record for a query that matched nothing.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::bare(
            ResolveStatus::NotFound,
            name,
            EntityKind::Other,
            "No information found.",
        )
    }

    /// Soft-failure record carrying the best-known name.
    pub fn soft_error(name: impl Into<String>, kind: EntityKind) -> Self {
        Self::bare(
            ResolveStatus::Error,
            name,
            kind,
            "Failed to fetch entity data.",
        )
    }

    /// Terminal record surfacing an ambiguous search for disambiguation.
    pub fn ambiguous(candidates: Vec<Candidate>) -> Self {
        let mut record = Self::bare(
            ResolveStatus::MultipleResults,
            "",
            EntityKind::Other,
            "Multiple matching entities found.",
        );
        record.candidates = candidates;
        record
    }
}

/// Canonical Wikidata page URL for an entity ID.
pub fn wikidata_page_url(id: &str) -> String {
    format!("https://www.wikidata.org/wiki/{}", id)
}

/// Wikipedia article URL for a sitelink title (spaces become underscores).
pub fn article_url(language: &str, title: &str) -> String {
    format!(
        "https://{}.wikipedia.org/wiki/{}",
        language,
        title.replace(' ', "_")
    )
}

/// Public file-serving URL for a Commons file name.
pub fn commons_file_url(file_name: &str) -> String {
    format!(
        "https://commons.wikimedia.org/wiki/Special:FilePath/{}",
        file_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(ResolveStatus::Ok.as_str(), "ok");
        assert_eq!(ResolveStatus::NotFound.as_str(), "not_found");
        assert_eq!(ResolveStatus::MultipleResults.as_str(), "multiple_results");
        assert_eq!(ResolveStatus::Error.as_str(), "error");
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let record = DetailRecord::not_found("nobody");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["status"], "not_found");
        assert!(json.get("occupation").is_none());
        assert!(json.get("images").is_none());
        assert!(json.get("candidates").is_none());
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_ambiguous_keeps_candidate_list() {
        let candidates = vec![Candidate {
            id: "Q937".to_string(),
            name: "Albert Einstein".to_string(),
            kind: EntityKind::Real,
            description: "physicist".to_string(),
            url: wikidata_page_url("Q937"),
        }];
        let record = DetailRecord::ambiguous(candidates);

        assert_eq!(record.status, ResolveStatus::MultipleResults);
        assert_eq!(record.candidates.len(), 1);
        assert_eq!(record.candidates[0].id, "Q937");
    }

    #[test]
    fn test_url_schemes() {
        assert_eq!(wikidata_page_url("Q937"), "https://www.wikidata.org/wiki/Q937");
        assert_eq!(
            article_url("en", "Albert Einstein"),
            "https://en.wikipedia.org/wiki/Albert_Einstein"
        );
        assert_eq!(
            commons_file_url("Einstein 1921.jpg"),
            "https://commons.wikimedia.org/wiki/Special:FilePath/Einstein 1921.jpg"
        );
    }
}
