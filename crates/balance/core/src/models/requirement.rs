//! Level-requirement tables and the reverse lookup over them.

/// Minimum player level needed to upgrade a skill or weapon to `level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LevelRequirement {
    pub level: u32,
    pub min_player_level_required: u32,
}

impl LevelRequirement {
    pub const fn new(level: u32, min_player_level_required: u32) -> Self {
        Self {
            level,
            min_player_level_required,
        }
    }
}

/// Returns the `level` of the last requirement unlocked at `player_level`.
///
/// Scans in table order and keeps the last entry whose
/// `min_player_level_required <= player_level`. Early player levels may
/// unlock nothing, in which case this falls back to 0.
pub fn max_unlocked_level(requirements: &[LevelRequirement], player_level: u32) -> u32 {
    requirements
        .iter()
        .rev()
        .find(|requirement| requirement.min_player_level_required <= player_level)
        .map(|requirement| requirement.level)
        .unwrap_or(0)
}
