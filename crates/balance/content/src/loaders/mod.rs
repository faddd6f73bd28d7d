//! Content loaders for reading balance data from files.

pub mod catalogs;
pub mod entities;
pub mod factory;

pub use catalogs::{AttributeLoader, ItemLoader, QuestLoader};
pub use entities::{EnemyLoader, PlayerLoader, SkillCatalog, SkillLoader, WeaponLoader};
pub use factory::{Content, ContentFactory};

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a RON file; `what` names the document in errors.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content).with_context(|| format!("Failed to parse {what} RON {}", path.display()))
}
