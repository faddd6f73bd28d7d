//! Destination for published datasets.
//!
//! Each dataset is a single JSON document addressed by a [`DatasetKey`].
//! Writes fully replace the previous document, so re-running a build is
//! idempotent.

pub mod error;
pub mod file;
pub mod memory;

use std::fmt;

use balance_core::{SkillCategory, WeaponRarity};
use serde::Serialize;

pub use error::{Result, StoreError};
pub use file::FileBlobStore;
pub use memory::InMemoryBlobStore;

/// Storage for encoded datasets.
pub trait BlobStore: Send + Sync {
    /// Replace the document stored under `key`.
    fn put(&self, key: &DatasetKey, bytes: &[u8]) -> Result<()>;

    /// Load the document stored under `key`.
    fn get(&self, key: &DatasetKey) -> Result<Option<Vec<u8>>>;

    /// Check if a document exists.
    fn exists(&self, key: &DatasetKey) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }

    /// List stored dataset paths in sorted order.
    fn list(&self) -> Result<Vec<String>>;
}

/// Address of a published dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    Attributes,
    Items,
    Quests,
    PlayerLevelMechanics,
    SkillLevelRequirement,
    WeaponLevelRequirement,
    Enemy(String),
    Weapon { rarity: WeaponRarity, slug: String },
    Skill { category: SkillCategory, slug: String },
    /// Digests of every dataset written by a build.
    Manifest,
}

impl DatasetKey {
    pub fn enemy(slug: impl Into<String>) -> Self {
        Self::Enemy(slug.into())
    }

    pub fn weapon(rarity: WeaponRarity, slug: impl Into<String>) -> Self {
        Self::Weapon {
            rarity,
            slug: slug.into(),
        }
    }

    pub fn skill(category: SkillCategory, slug: impl Into<String>) -> Self {
        Self::Skill {
            category,
            slug: slug.into(),
        }
    }

    /// Slash-separated path of the dataset, without extension.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes => f.write_str("attributes"),
            Self::Items => f.write_str("items"),
            Self::Quests => f.write_str("quests"),
            Self::PlayerLevelMechanics => f.write_str("player-level-mechanics"),
            Self::SkillLevelRequirement => f.write_str("skill-level-requirement"),
            Self::WeaponLevelRequirement => f.write_str("weapon-level-requirement"),
            Self::Enemy(slug) => write!(f, "enemies/{}", slug),
            Self::Weapon { rarity, slug } => write!(f, "weapons/{}/{}", rarity.tier(), slug),
            Self::Skill { category, slug } => write!(f, "skills/{}/{}", category, slug),
            Self::Manifest => f.write_str("manifest"),
        }
    }
}

/// Encodes a dataset as pretty JSON with a 4-space indent.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| StoreError::Json(format!("Failed to serialize dataset: {}", e)))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decodes a dataset previously written with [`encode`].
pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| StoreError::Json(format!("Failed to deserialize dataset: {}", e)))
}
