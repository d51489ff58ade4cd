use serde::{Deserialize, Serialize};

/// Classification of a knowledge-graph entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A real, historical person (instance of human).
    Real,
    /// A fictional character or fictional human.
    Fictional,
    /// Anything else, including entities we failed to classify.
    Other,
}

impl EntityKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Real => "real",
            EntityKind::Fictional => "fictional",
            EntityKind::Other => "other",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real" => Ok(EntityKind::Real),
            "fictional" => Ok(EntityKind::Fictional),
            "other" => Ok(EntityKind::Other),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}
