//! Item records.

use super::common::StatusEffect;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique within the item catalog.
    pub name: String,
    pub description: String,
    pub attributes: Vec<ItemAttribute>,
}

/// One effect an item applies when used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttribute {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ItemType,
    pub chance: f64,
    pub modifier: ItemModifier,
    pub radius: f64,
}

/// Values an item attribute applies.
///
/// When `stat_boosts` is present, `values` holds one entry per boosted stat.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemModifier {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub status_effects: Option<Vec<StatusEffect>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub stat_boosts: Option<Vec<Stat>>,
    pub values: Vec<f64>,
}

impl ItemModifier {
    /// Checks the pairing between boosted stats and their values.
    pub fn is_consistent(&self) -> bool {
        match &self.stat_boosts {
            Some(stats) => stats.len() == self.values.len(),
            None => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum ItemType {
    Damage,
    Healing,
    #[strum(serialize = "Status Effect")]
    StatusEffect,
    #[strum(serialize = "Gain XP")]
    GainXp,
    #[strum(serialize = "Gain Coins")]
    GainCoins,
    #[strum(serialize = "Misc Currency")]
    MiscCurrency,
    #[strum(serialize = "Stat Boost")]
    StatBoost,
}

/// Player stats an item may boost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Stat {
    #[strum(serialize = "HP")]
    Hp,
    #[strum(serialize = "XP")]
    Xp,
    Level,
    #[strum(serialize = "HP Regen")]
    HpRegen,
    #[strum(serialize = "Movement Speed")]
    MovementSpeed,
}

string_enum!(ItemType, Stat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_boosts_need_matching_values() {
        let mut modifier = ItemModifier {
            status_effects: None,
            stat_boosts: Some(vec![Stat::Hp, Stat::HpRegen]),
            values: vec![50.0],
        };
        assert!(!modifier.is_consistent());
        modifier.values.push(0.5);
        assert!(modifier.is_consistent());
    }
}
