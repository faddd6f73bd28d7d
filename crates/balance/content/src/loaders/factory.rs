//! Content factory for loading every authored input from a data directory.

use std::path::{Path, PathBuf};

use balance_core::{Attribute, EnemySpec, Item, PlayerSpec, Quest, WeaponSpec};

use crate::loaders::{
    AttributeLoader, EnemyLoader, ItemLoader, LoadResult, PlayerLoader, QuestLoader,
    SkillCatalog, SkillLoader, WeaponLoader,
};

/// Everything a balance build reads besides the workbook.
#[derive(Debug, Clone)]
pub struct Content {
    pub attributes: Vec<Attribute>,
    pub items: Vec<Item>,
    pub quests: Vec<Quest>,
    pub player: PlayerSpec,
    pub enemies: Vec<EnemySpec>,
    pub weapons: Vec<WeaponSpec>,
    pub skills: SkillCatalog,
}

/// Content factory that loads balance content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── attributes.ron
/// ├── items.ron
/// ├── quests.ron
/// ├── player.ron
/// ├── enemies.ron
/// ├── weapons.ron
/// ├── skills.ron
/// └── sheets/
///     └── progression.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the attribute catalog from `attributes.ron`.
    pub fn load_attributes(&self) -> LoadResult<Vec<Attribute>> {
        AttributeLoader::load(&self.data_dir.join("attributes.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the quest catalog from `quests.ron`.
    pub fn load_quests(&self) -> LoadResult<Vec<Quest>> {
        QuestLoader::load(&self.data_dir.join("quests.ron"))
    }

    /// Load player progression constants from `player.ron`.
    pub fn load_player(&self) -> LoadResult<PlayerSpec> {
        PlayerLoader::load(&self.data_dir.join("player.ron"))
    }

    /// Load enemy specs from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemySpec>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load weapon specs from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<Vec<WeaponSpec>> {
        WeaponLoader::load(&self.data_dir.join("weapons.ron"))
    }

    /// Load both skill families from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load every content file.
    pub fn load_content(&self) -> LoadResult<Content> {
        Ok(Content {
            attributes: self.load_attributes()?,
            items: self.load_items()?,
            quests: self.load_quests()?,
            player: self.load_player()?,
            enemies: self.load_enemies()?,
            weapons: self.load_weapons()?,
            skills: self.load_skills()?,
        })
    }

    /// Default location of the progression workbook.
    pub fn workbook_path(&self) -> PathBuf {
        self.data_dir.join("sheets").join("progression.ron")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
