//! Deterministic level-mechanics generation for game balance data.
//!
//! `balance-core` turns authored base stats, growth tables and cost
//! schedules into complete per-level tables for enemies, weapons, skills and
//! the player. Everything here is a pure function of its inputs; reading
//! content and writing datasets belongs to the loader and compiler crates,
//! which depend on the types re-exported here.
pub mod catalog;
pub mod error;
pub mod formula;
pub mod growth;
pub mod mechanics;
pub mod models;
pub mod schedule;

pub use catalog::AttributeCatalog;
pub use error::{MechanicsError, Result};
pub use formula::{Polynomial, Term, round2};
pub use growth::{GrowthTable, LevelBand, ScalingBand};
pub use mechanics::{
    AttributeGrant, DamagingSkillRange, DamagingSkillSpec, EnemyBaseStats, EnemyRange,
    EnemySkillSpec, EnemySpec, KillRewardFormula, NonDamagingSkillRange, NonDamagingSkillSpec,
    PlayerBaseStats, PlayerSpec, SkillAttributeSpec, SkillProfile, WeaponRange, WeaponSpec,
    generate, level_up_xp_required,
};
pub use models::*;
pub use schedule::{CostSchedule, CostTier};
