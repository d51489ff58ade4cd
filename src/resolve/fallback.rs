//! Hand-curated fallback catalog for random requests.
//!
//! When live sampling fails (SPARQL down, rate limited, empty batch), the
//! orchestrator picks from these known-good entities instead, so the
//! random-entity feature never surfaces a hard failure.

use rand::seq::SliceRandom;

use super::kind::EntityKind;
use super::types::{wikidata_page_url, Candidate, DetailRecord, ResolveStatus};

/// A curated known-good entity, independent of any live lookup.
#[derive(Debug, Clone, Copy)]
pub struct FallbackEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: EntityKind,
    pub description: &'static str,
}

const REAL_ENTRIES: [FallbackEntry; 5] = [
    FallbackEntry {
        id: "Q937",
        name: "Albert Einstein",
        kind: EntityKind::Real,
        description: "theoretical physicist",
    },
    FallbackEntry {
        id: "Q7186",
        name: "Marie Curie",
        kind: EntityKind::Real,
        description: "physicist and chemist",
    },
    FallbackEntry {
        id: "Q935",
        name: "Isaac Newton",
        kind: EntityKind::Real,
        description: "English mathematician and physicist",
    },
    FallbackEntry {
        id: "Q762",
        name: "Leonardo da Vinci",
        kind: EntityKind::Real,
        description: "Italian Renaissance polymath",
    },
    FallbackEntry {
        id: "Q7259",
        name: "Ada Lovelace",
        kind: EntityKind::Real,
        description: "English mathematician and writer",
    },
];

const FICTIONAL_ENTRIES: [FallbackEntry; 4] = [
    FallbackEntry {
        id: "Q4653",
        name: "Sherlock Holmes",
        kind: EntityKind::Fictional,
        description: "fictional detective",
    },
    FallbackEntry {
        id: "Q3244512",
        name: "Harry Potter",
        kind: EntityKind::Fictional,
        description: "fictional wizard",
    },
    FallbackEntry {
        id: "Q2009573",
        name: "James Bond",
        kind: EntityKind::Fictional,
        description: "fictional British secret agent",
    },
    FallbackEntry {
        id: "Q173998",
        name: "Don Quixote",
        kind: EntityKind::Fictional,
        description: "fictional knight-errant",
    },
];

/// Uniform random pick from the catalog for a kind. `Other` has no catalog
/// and yields the first real entry as a last resort; callers reject `Other`
/// before ever reaching this point.
pub fn pick(kind: EntityKind) -> &'static FallbackEntry {
    let entries: &[FallbackEntry] = match kind {
        EntityKind::Real | EntityKind::Other => &REAL_ENTRIES,
        EntityKind::Fictional => &FICTIONAL_ENTRIES,
    };
    entries
        .choose(&mut rand::thread_rng())
        .unwrap_or(&entries[0])
}

impl FallbackEntry {
    /// View this entry as a candidate for a live detail lookup.
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            id: self.id.to_string(),
            name: self.name.to_string(),
            kind: self.kind,
            description: self.description.to_string(),
            url: wikidata_page_url(self.id),
        }
    }

    /// Minimal `status=ok` record built from the entry alone, for when even
    /// the live lookup of a catalog entity fails.
    pub fn to_record(&self) -> DetailRecord {
        let mut record = DetailRecord::bare(
            ResolveStatus::Ok,
            self.name,
            self.kind,
            self.description,
        );
        record.url = wikidata_page_url(self.id);
        record.wikidata_id = self.id.to_string();
        record
    }
}
