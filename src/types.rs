use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One clan of the source table with its totem items grouped by category
///
/// Category order is the order the table lists them in and is carried
/// through to the order of the generated items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClanRecord {
    /// Display name in Boe orthography, e.g. "BOE ETUIEDAGAMAGE"
    pub clan_name: String,
    /// Slug suffix used to build clan and item ids, e.g. "boe_etuiedagamage"
    pub clan_id: String,
    /// Category name (KIEGE, BAREGE, ...) to raw item strings
    #[serde(default)]
    pub data: IndexMap<String, Vec<String>>,
}

impl ClanRecord {
    /// Create a clan record with no categories
    pub fn new(clan_name: impl Into<String>, clan_id: impl Into<String>) -> Self {
        Self {
            clan_name: clan_name.into(),
            clan_id: clan_id.into(),
            data: IndexMap::new(),
        }
    }

    /// Append a category of raw item strings
    pub fn with_category<I, S>(mut self, category: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data
            .insert(category.into(), items.into_iter().map(Into::into).collect());
        self
    }

    /// Id of the clan in the generated document ("clan_" + suffix)
    pub fn output_id(&self) -> String {
        format!("clan_{}", self.clan_id)
    }

    /// Total number of raw item strings across all categories
    pub fn item_count(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }
}

/// A raw item string split into its native name and its gloss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    /// Text before the first parenthesis
    pub name: String,
    /// Parenthesized gloss, or the name itself when there is none
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputClan {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub correct_clan_id: String,
    pub color: String,
    pub clan: String,
}

/// The document consumed by the game: every clan and every totem item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub clans: Vec<OutputClan>,
    pub items: Vec<OutputItem>,
}

/// Item counts for a generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub clan_count: usize,
    pub item_count: usize,
    /// (clan id, item count) in clan order
    pub items_per_clan: Vec<(String, usize)>,
}

impl GameData {
    pub fn summary(&self) -> Summary {
        let items_per_clan = self
            .clans
            .iter()
            .map(|clan| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.correct_clan_id == clan.id)
                    .count();
                (clan.id.clone(), count)
            })
            .collect();

        Summary {
            clan_count: self.clans.len(),
            item_count: self.items.len(),
            items_per_clan,
        }
    }
}
