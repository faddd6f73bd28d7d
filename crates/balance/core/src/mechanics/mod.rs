//! Per-family level-mechanics generators.
//!
//! Each family pairs an authored `*Spec` (base stats, growth table, cost
//! schedule, attribute grants) with a generator that runs the shared
//! [`generate`] recurrence and resolves attributes against an
//! [`AttributeCatalog`](crate::AttributeCatalog) at every level.

pub mod enemy;
pub mod generator;
pub mod player;
pub mod skill;
pub mod weapon;

pub use enemy::{EnemyBaseStats, EnemyRange, EnemySkillSpec, EnemySpec, KillRewardFormula};
pub use generator::generate;
pub use player::{PlayerBaseStats, PlayerSpec, level_up_xp_required};
pub use skill::{
    DamagingSkillRange, DamagingSkillSpec, NonDamagingSkillRange, NonDamagingSkillSpec,
    SkillAttributeSpec, SkillProfile,
};
pub use weapon::{AttributeGrant, WeaponRange, WeaponSpec};

use crate::catalog::AttributeCatalog;
use crate::error::Result;
use crate::models::{AttributeInstance, Modifier};

/// Resolves `name` and attaches per-level strength to it.
pub(crate) fn instance(
    catalog: &AttributeCatalog,
    name: &str,
    chance: f64,
    modifier: Modifier,
    radius: f64,
) -> Result<AttributeInstance> {
    Ok(AttributeInstance {
        attribute: catalog.resolve(name)?.clone(),
        chance,
        modifier,
        radius,
    })
}
