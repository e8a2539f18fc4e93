//! Selection tokens and tagged entity references

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const TRAIL_PREFIX: &str = "trail:";
pub const PLACE_PREFIX: &str = "place:";
pub const ARTISAN_PREFIX: &str = "artisan:";

/// Identifies what the map should highlight.
///
/// Explicit tags avoid probing the place and artisan namespaces in turn.
/// A bare id is still accepted and resolves place-first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionToken {
    Place(String),
    Artisan(String),
    Trail(String),
    Bare(String),
}

impl SelectionToken {
    /// Parse a token string. Never fails: anything unprefixed is a bare id.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(id) = raw.strip_prefix(TRAIL_PREFIX) {
            SelectionToken::Trail(id.to_string())
        } else if let Some(id) = raw.strip_prefix(PLACE_PREFIX) {
            SelectionToken::Place(id.to_string())
        } else if let Some(id) = raw.strip_prefix(ARTISAN_PREFIX) {
            SelectionToken::Artisan(id.to_string())
        } else {
            SelectionToken::Bare(raw.to_string())
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            SelectionToken::Place(id)
            | SelectionToken::Artisan(id)
            | SelectionToken::Trail(id)
            | SelectionToken::Bare(id) => id,
        }
    }
}

impl FromStr for SelectionToken {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SelectionToken::parse(s))
    }
}

impl fmt::Display for SelectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionToken::Place(id) => write!(f, "{PLACE_PREFIX}{id}"),
            SelectionToken::Artisan(id) => write!(f, "{ARTISAN_PREFIX}{id}"),
            SelectionToken::Trail(id) => write!(f, "{TRAIL_PREFIX}{id}"),
            SelectionToken::Bare(id) => f.write_str(id),
        }
    }
}

impl From<EntityRef> for SelectionToken {
    fn from(entity: EntityRef) -> Self {
        match entity {
            EntityRef::Place(id) => SelectionToken::Place(id),
            EntityRef::Artisan(id) => SelectionToken::Artisan(id),
        }
    }
}

/// A catalog entity that owns a map marker
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntityRef {
    Place(String),
    Artisan(String),
}

impl EntityRef {
    #[must_use]
    pub fn place(id: impl Into<String>) -> Self {
        EntityRef::Place(id.into())
    }

    #[must_use]
    pub fn artisan(id: impl Into<String>) -> Self {
        EntityRef::Artisan(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Place(id) | EntityRef::Artisan(id) => id,
        }
    }

    /// Stable marker key, e.g. `place:mysore-palace`
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            EntityRef::Place(id) => format!("{PLACE_PREFIX}{id}"),
            EntityRef::Artisan(id) => format!("{ARTISAN_PREFIX}{id}"),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trail:silk-craft-trail", SelectionToken::Trail("silk-craft-trail".into()))]
    #[case("place:mysore-palace", SelectionToken::Place("mysore-palace".into()))]
    #[case("artisan:rajanna-silk", SelectionToken::Artisan("rajanna-silk".into()))]
    #[case("mysore-palace", SelectionToken::Bare("mysore-palace".into()))]
    #[case("  karanji-lake ", SelectionToken::Bare("karanji-lake".into()))]
    #[case("", SelectionToken::Bare(String::new()))]
    #[case("trail:", SelectionToken::Trail(String::new()))]
    fn test_parse(#[case] raw: &str, #[case] expected: SelectionToken) {
        assert_eq!(SelectionToken::parse(raw), expected);
    }

    #[test]
    fn test_display_is_canonical() {
        for raw in ["trail:artisan-trail", "place:karanji-lake", "artisan:lakshmi-pottery", "karanji-lake"] {
            assert_eq!(SelectionToken::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_entity_ref_serialization() {
        let entity = EntityRef::place("mandi-mohalla");
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "place", "id": "mandi-mohalla"}));
        assert_eq!(entity.key(), "place:mandi-mohalla");
        assert_eq!(
            SelectionToken::from(EntityRef::artisan("gowramma-silk")).to_string(),
            "artisan:gowramma-silk"
        );
    }
}
