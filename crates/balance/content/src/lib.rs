//! Designer-authored balance content and its loaders.
//!
//! This crate houses the authored inputs of a balance build:
//! - Attribute catalog (RON)
//! - Item and quest catalogs (RON)
//! - Enemy, weapon and skill specs with their growth tables and cost tiers (RON)
//! - Player progression constants (RON)
//! - The progression workbook exported from the design spreadsheet (RON)
//!
//! All loaders deserialize straight into balance-core types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttributeLoader, Content, ContentFactory, EnemyLoader, ItemLoader, PlayerLoader, QuestLoader,
    SkillCatalog, SkillLoader, WeaponLoader,
};

/// Content directory shipped with this crate.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
