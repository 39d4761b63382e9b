//! Reference catalogue records (spells, items, creatures)

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalogue section, also used as the REST path segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    #[default]
    Spells,
    Items,
    Creatures,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [Self::Spells, Self::Items, Self::Creatures];

    /// Path segment under `/reference/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Spells => "spells",
            Self::Items => "items",
            Self::Creatures => "creatures",
        }
    }

    /// Singular tag carried in suggestion `type` fields
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Spells => "spell",
            Self::Items => "item",
            Self::Creatures => "creature",
        }
    }

    pub fn from_singular(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.singular() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellData {
    pub id: i64,
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub casting_time: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub components: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub concentration: bool,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub at_higher_levels: Option<String>,
    #[serde(default)]
    pub classes: Option<Vec<String>>,
    #[serde(default)]
    pub subclasses: Option<Vec<String>>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub ac: Option<String>,
    #[serde(default)]
    pub properties: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub creature_type: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub ac: Option<i32>,
    #[serde(default)]
    pub hp: Option<String>,
    #[serde(default)]
    pub initiative: Option<String>,
    #[serde(default)]
    pub speed: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub dexterity: Option<i32>,
    #[serde(default)]
    pub constitution: Option<i32>,
    #[serde(default)]
    pub intelligence: Option<i32>,
    #[serde(default)]
    pub wisdom: Option<i32>,
    #[serde(default)]
    pub charisma: Option<i32>,
    #[serde(default)]
    pub cr: Option<String>,
    #[serde(default)]
    pub xp: Option<i64>,
    #[serde(default)]
    pub senses: Option<String>,
    #[serde(default)]
    pub languages: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub actions: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub legendary_actions: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSuggestionData {
    pub id: i64,
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub school: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSuggestionData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSuggestionData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cr: Option<String>,
    #[serde(default)]
    pub creature_type: Option<String>,
}

/// Response of `GET /reference/search/suggestions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsData {
    #[serde(default)]
    pub spells: Vec<SpellSuggestionData>,
    #[serde(default)]
    pub items: Vec<ItemSuggestionData>,
    #[serde(default)]
    pub creatures: Vec<CreatureSuggestionData>,
}

impl SuggestionsData {
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty() && self.items.is_empty() && self.creatures.is_empty()
    }
}

/// The backend emits naive ISO timestamps; treat them as UTC. Anything
/// unparseable becomes `None` rather than failing the whole record.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(ts.with_timezone(&Utc)));
        }
        Ok(NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc()))
    }
}
