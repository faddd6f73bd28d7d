//! Player skill records as published to the client.

use super::common::{RangeType, TargetMechanics};
use super::cost::{PurchaseCost, UpgradeCost};
use super::weapon::AttributeInstance;

/// Skill category; also the `<category>` segment of a skill's dataset name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SkillCategory {
    Damaging,
    NonDamaging,
}

/// Skill-level header shared by both skill families.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Skill<L> {
    pub name: String,
    pub description: String,
    pub target_mechanics: TargetMechanics,
    pub range_type: RangeType,
    /// Cast range in units (0 for self-targeted skills).
    pub range: f64,
    pub purchase_cost: PurchaseCost,
    pub level_mechanics: Vec<L>,
}

pub type DamagingSkill = Skill<DamagingSkillLevelMechanics>;
pub type NonDamagingSkill = Skill<NonDamagingSkillLevelMechanics>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DamagingSkillLevelMechanics {
    pub level: u32,
    pub base_damage: f64,
    pub base_skill_cast_time: f64,
    pub duration: f64,
    pub cooldown: f64,
    pub attributes: Vec<AttributeInstance>,
    pub upgrade_cost: UpgradeCost,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NonDamagingSkillLevelMechanics {
    pub level: u32,
    pub base_skill_cast_time: f64,
    pub duration: f64,
    pub cooldown: f64,
    pub attributes: Vec<AttributeInstance>,
    pub upgrade_cost: UpgradeCost,
}
