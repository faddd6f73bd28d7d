//! Weapon records as published to the client.

use super::attribute::Attribute;
use super::common::{Modifier, RangeType};
use super::cost::UpgradeCost;

/// A weapon and its full level table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Weapon {
    pub name: String,
    pub rarity: WeaponRarity,
    pub description: String,
    pub range_type: RangeType,
    pub level_mechanics: Vec<WeaponLevelMechanics>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeaponLevelMechanics {
    pub level: u32,
    pub base_damage: f64,
    pub base_attack_range: f64,
    pub base_attack_time: f64,
    pub crit_chance: f64,
    pub attributes: Vec<AttributeInstance>,
    pub upgrade_cost: UpgradeCost,
}

/// Weapon rarity; also the `<tier>` segment of a weapon's dataset name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WeaponRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl WeaponRarity {
    /// Lowercase tier name used in dataset paths.
    pub fn tier(&self) -> String {
        self.as_ref().to_ascii_lowercase()
    }
}

/// A catalog attribute attached to a weapon or skill level, with the
/// per-level strength it plays out at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeInstance {
    pub attribute: Attribute,
    /// Ratio from 0 to 1.
    pub chance: f64,
    pub modifier: Modifier,
    pub radius: f64,
}
