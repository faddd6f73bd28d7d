//! Loaders for the static catalogs published as-is.

use std::path::Path;

use balance_core::{Attribute, Item, Quest};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Attribute catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeFile {
    pub attributes: Vec<Attribute>,
}

/// Loader for the attribute catalog.
pub struct AttributeLoader;

impl AttributeLoader {
    /// Loads attributes in authoring order. Duplicates are kept; catalog
    /// construction decides whether they are an error.
    pub fn load(path: &Path) -> LoadResult<Vec<Attribute>> {
        let file: AttributeFile = read_ron(path, "attribute catalog")?;
        Ok(file.attributes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFile {
    pub items: Vec<Item>,
}

/// Loader for the item catalog.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let file: ItemFile = read_ron(path, "item catalog")?;
        for item in &file.items {
            for attribute in &item.attributes {
                anyhow::ensure!(
                    attribute.modifier.is_consistent(),
                    "Item '{}' boosts {} stats but lists {} values",
                    item.name,
                    attribute.modifier.stat_boosts.as_ref().map_or(0, Vec::len),
                    attribute.modifier.values.len()
                );
            }
        }
        Ok(file.items)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestFile {
    pub quests: Vec<Quest>,
}

/// Loader for the quest catalog.
pub struct QuestLoader;

impl QuestLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Quest>> {
        let file: QuestFile = read_ron(path, "quest catalog")?;
        Ok(file.quests)
    }
}
