//! Player progression records.

/// Player stats and unlocks at a single level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerLevelMechanics {
    pub level: u32,
    pub base_hp: f64,
    pub base_hp_regen: f64,
    pub base_movement_speed: f64,
    /// XP needed to go from this level to the next.
    pub level_up_xp_required: u64,
    /// Highest level any skill may be upgraded to at this player level.
    pub max_skill_level: u32,
    /// Highest level any weapon may be upgraded to at this player level.
    pub max_weapon_level: u32,
}
