//! Attribute records shared through the catalog.

use super::common::{RangeType, StatusEffect, TargetMechanics};

/// A named characteristic of a skill or weapon.
///
/// `Attribute` carries catalog defaults only. Per-level chance, modifier and
/// radius live on the attribute instances attached to level mechanics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Attribute {
    /// Unique within the catalog.
    pub name: String,
    pub description: String,
    pub types: Vec<AttributeType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range_type: Option<RangeType>,
    pub target_mechanics: TargetMechanics,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effect: Option<StatusEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: f64,
    /// Seconds; any attribute with a duration above 0 acts as a status effect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: f64,
    /// Trigger chance as a ratio from 0 to 1.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: f64,
}

/// Categories an attribute can belong to (an attribute may have several).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum AttributeType {
    #[strum(serialize = "Set Damage")]
    SetDamage,
    #[strum(serialize = "Own HP Damage")]
    OwnHpDamage,
    #[strum(serialize = "Enemy HP Damage")]
    EnemyHpDamage,
    #[strum(serialize = "Set Healing")]
    SetHealing,
    #[strum(serialize = "HP Healing")]
    HpHealing,
    #[strum(serialize = "Status Effect")]
    StatusEffect,
}

string_enum!(AttributeType);
