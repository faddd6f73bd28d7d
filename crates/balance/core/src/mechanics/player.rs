//! Player progression.

use crate::error::Result;
use crate::formula::round2;
use crate::models::{LevelRequirement, PlayerLevelMechanics, max_unlocked_level};

use super::generator::generate;

/// XP needed to level up from `level`: `15 * level^2 + 20 * level + 80`.
pub const fn level_up_xp_required(level: u32) -> u64 {
    let level = level as u64;
    15 * level * level + 20 * level + 80
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub max_level: u32,
    pub base: PlayerBaseStats,
    pub hp_increment: f64,
    pub hp_regen_multiplier: f64,
}

/// Level 1 stats, published as authored.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBaseStats {
    pub hp: f64,
    pub hp_regen: f64,
    pub movement_speed: f64,
    pub level_up_xp_required: u64,
    pub max_skill_level: u32,
    pub max_weapon_level: u32,
}

impl PlayerSpec {
    /// Generates the player table from the skill and weapon requirement
    /// tables extracted earlier in the build.
    pub fn generate(
        &self,
        skill_requirements: &[LevelRequirement],
        weapon_requirements: &[LevelRequirement],
    ) -> Result<Vec<PlayerLevelMechanics>> {
        let base = PlayerLevelMechanics {
            level: 1,
            base_hp: self.base.hp,
            base_hp_regen: self.base.hp_regen,
            base_movement_speed: self.base.movement_speed,
            level_up_xp_required: self.base.level_up_xp_required,
            max_skill_level: self.base.max_skill_level,
            max_weapon_level: self.base.max_weapon_level,
        };

        generate(self.max_level, base, |level, previous| {
            let base_hp = previous.base_hp + self.hp_increment;
            Ok(PlayerLevelMechanics {
                level,
                base_hp,
                base_hp_regen: round2(base_hp * self.hp_regen_multiplier),
                base_movement_speed: self.base.movement_speed,
                level_up_xp_required: level_up_xp_required(level),
                max_skill_level: max_unlocked_level(skill_requirements, level),
                max_weapon_level: max_unlocked_level(weapon_requirements, level),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerSpec {
        PlayerSpec {
            max_level: 150,
            base: PlayerBaseStats {
                hp: 350.0,
                hp_regen: 0.5,
                movement_speed: 175.0,
                level_up_xp_required: 115,
                max_skill_level: 1,
                max_weapon_level: 1,
            },
            hp_increment: 75.0,
            hp_regen_multiplier: 0.008,
        }
    }

    #[test]
    fn xp_curve() {
        assert_eq!(level_up_xp_required(1), 115);
        assert_eq!(level_up_xp_required(2), 180);
        assert_eq!(level_up_xp_required(150), 340_580);
    }

    #[test]
    fn player_recurrence() {
        let skills = [LevelRequirement::new(1, 1), LevelRequirement::new(2, 5)];
        let weapons = [LevelRequirement::new(1, 1), LevelRequirement::new(2, 4)];
        let levels = player().generate(&skills, &weapons).unwrap();

        assert_eq!(levels.len(), 150);
        assert_eq!(levels[0].base_hp, 350.0);
        assert_eq!(levels[1].base_hp, 425.0);
        assert_eq!(levels[1].base_hp_regen, 3.4);
        assert_eq!(levels[1].level_up_xp_required, 180);
        assert_eq!(levels[3].max_skill_level, 1);
        assert_eq!(levels[3].max_weapon_level, 2);
        assert_eq!(levels[4].max_skill_level, 2);
        assert!(levels.iter().all(|l| l.base_movement_speed == 175.0));
    }

    #[test]
    fn no_unlocks_falls_back_to_zero() {
        let levels = player().generate(&[], &[]).unwrap();
        assert_eq!(levels[0].max_skill_level, 1);
        assert_eq!(levels[1].max_skill_level, 0);
        assert_eq!(levels[1].max_weapon_level, 0);
    }
}
