//! Loaders for entity specs (enemies, weapons, skills, player).

use std::path::Path;

use balance_core::{DamagingSkillSpec, EnemySpec, NonDamagingSkillSpec, PlayerSpec, WeaponSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyFile {
    pub enemies: Vec<EnemySpec>,
}

pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemySpec>> {
        let file: EnemyFile = read_ron(path, "enemy specs")?;
        Ok(file.enemies)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponFile {
    pub weapons: Vec<WeaponSpec>,
}

pub struct WeaponLoader;

impl WeaponLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<WeaponSpec>> {
        let file: WeaponFile = read_ron(path, "weapon specs")?;
        Ok(file.weapons)
    }
}

/// Both skill families, as authored in `skills.ron`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCatalog {
    #[serde(default)]
    pub damaging: Vec<DamagingSkillSpec>,
    #[serde(default)]
    pub non_damaging: Vec<NonDamagingSkillSpec>,
}

impl SkillCatalog {
    /// Slugs of every skill, damaging first.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.damaging
            .iter()
            .map(|skill| skill.profile.slug.as_str())
            .chain(self.non_damaging.iter().map(|skill| skill.profile.slug.as_str()))
    }
}

pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        read_ron(path, "skill specs")
    }
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load(path: &Path) -> LoadResult<PlayerSpec> {
        read_ron(path, "player spec")
    }
}
