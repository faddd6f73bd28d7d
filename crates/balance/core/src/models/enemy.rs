//! Enemy records as published to the client.

use super::attribute::Attribute;
use super::common::{Modifier, RangeType};

/// An enemy and its full level table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Enemy {
    pub name: String,
    pub description: String,
    pub range_type: RangeType,
    /// Position `i` holds level `i + 1`.
    pub level_mechanics: Vec<EnemyLevelMechanics>,
}

/// Enemy stats at a single level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnemyLevelMechanics {
    pub level: u32,
    pub base_hp: f64,
    pub base_hp_regen: f64,
    /// Unity units per second, times 100.
    pub base_movement_speed: f64,
    pub base_damage: f64,
    /// Only meaningful for ranged enemies.
    pub base_projectile_velocity: f64,
    pub base_attack_range: f64,
    /// Seconds between attacks; the first attack takes half of this.
    pub base_attack_time: f64,
    pub crit_chance: f64,
    pub skill: EnemySkill,
    pub kill_rewards: Option<KillRewards>,
}

/// An enemy's innate skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnemySkill {
    pub attributes: Vec<Attribute>,
    /// Extra description on top of the attribute's own.
    pub add_description: String,
    pub level_mechanics: Vec<EnemySkillLevelMechanics>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySkillLevelMechanics {
    pub level: u32,
    pub duration: f64,
    pub modifier: Modifier,
    pub chance: f64,
    pub radius: f64,
}

/// Rewards for defeating an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillRewards {
    pub coins: u64,
    pub xp: u64,
}
