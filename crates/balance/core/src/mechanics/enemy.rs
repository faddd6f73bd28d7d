//! Enemy level mechanics.

use crate::catalog::AttributeCatalog;
use crate::error::Result;
use crate::formula::{Polynomial, round2};
use crate::growth::{GrowthTable, LevelBand};
use crate::models::{
    Enemy, EnemyLevelMechanics, EnemySkill, EnemySkillLevelMechanics, KillRewards, Modifier,
    RangeType,
};

use super::generator::generate;

/// Authored definition of one enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    /// Dataset slug, e.g. `firefly`.
    pub slug: String,
    pub name: String,
    pub description: String,
    pub range_type: RangeType,
    pub max_level: u32,
    pub base: EnemyBaseStats,
    /// `hp_regen = round2(hp * hp_regen_multiplier)` from level 2 on.
    pub hp_regen_multiplier: f64,
    pub growth: GrowthTable<EnemyRange>,
    pub skill: EnemySkillSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kill_rewards: Option<KillRewardFormula>,
}

/// Level 1 stats.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyBaseStats {
    pub hp: f64,
    pub hp_regen: f64,
    pub movement_speed: f64,
    pub damage: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub projectile_velocity: f64,
    pub attack_range: f64,
    pub attack_time: f64,
    pub crit_chance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyRange {
    pub from_level: u32,
    pub to_level: u32,
    pub hp_increment: f64,
    pub damage_increment: f64,
}

impl LevelBand for EnemyRange {
    fn from_level(&self) -> u32 {
        self.from_level
    }

    fn to_level(&self) -> u32 {
        self.to_level
    }
}

/// The enemy's innate skill; currently identical at every level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySkillSpec {
    /// Catalog name of the skill's attribute.
    pub attribute: String,
    pub add_description: String,
    pub duration: f64,
    pub modifier: Modifier,
    pub chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillRewardFormula {
    pub coins: Polynomial,
    pub xp: Polynomial,
}

impl KillRewardFormula {
    pub fn rewards_at(&self, level: u32) -> KillRewards {
        KillRewards {
            coins: self.coins.floor(level),
            xp: self.xp.floor(level),
        }
    }
}

impl EnemySpec {
    /// Generates the full enemy record.
    pub fn generate(&self, catalog: &AttributeCatalog) -> Result<Enemy> {
        let base = EnemyLevelMechanics {
            level: 1,
            base_hp: self.base.hp,
            base_hp_regen: self.base.hp_regen,
            base_movement_speed: self.base.movement_speed,
            base_damage: self.base.damage,
            base_projectile_velocity: self.base.projectile_velocity,
            base_attack_range: self.base.attack_range,
            base_attack_time: self.base.attack_time,
            crit_chance: self.base.crit_chance,
            skill: self.skill_at(catalog, 1)?,
            kill_rewards: self.kill_rewards_at(1),
        };

        let level_mechanics = generate(self.max_level, base, |level, previous| {
            let range = self.growth.range_for(level)?;
            let base_hp = previous.base_hp + range.hp_increment;
            Ok(EnemyLevelMechanics {
                level,
                base_hp,
                base_hp_regen: round2(base_hp * self.hp_regen_multiplier),
                base_damage: previous.base_damage + range.damage_increment,
                skill: self.skill_at(catalog, level)?,
                kill_rewards: self.kill_rewards_at(level),
                ..previous.clone()
            })
        })?;

        Ok(Enemy {
            name: self.name.clone(),
            description: self.description.clone(),
            range_type: self.range_type,
            level_mechanics,
        })
    }

    fn skill_at(&self, catalog: &AttributeCatalog, level: u32) -> Result<EnemySkill> {
        let attribute = catalog.resolve(&self.skill.attribute)?.clone();
        Ok(EnemySkill {
            attributes: vec![attribute],
            add_description: self.skill.add_description.clone(),
            level_mechanics: vec![EnemySkillLevelMechanics {
                level,
                duration: self.skill.duration,
                modifier: self.skill.modifier,
                chance: self.skill.chance,
                radius: self.skill.radius,
            }],
        })
    }

    fn kill_rewards_at(&self, level: u32) -> Option<KillRewards> {
        self.kill_rewards
            .as_ref()
            .map(|formula| formula.rewards_at(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::attribute;
    use crate::formula::Term;
    use crate::models::ModifierType;

    fn firefly() -> EnemySpec {
        EnemySpec {
            slug: "firefly".into(),
            name: "Firefly".into(),
            description: "A cute beetle-like insect.".into(),
            range_type: RangeType::Ranged,
            max_level: 150,
            base: EnemyBaseStats {
                hp: 70.0,
                hp_regen: 0.21,
                movement_speed: 145.0,
                damage: 12.0,
                projectile_velocity: 600.0,
                attack_range: 575.0,
                attack_time: 1.4,
                crit_chance: 0.075,
            },
            hp_regen_multiplier: 0.003,
            growth: GrowthTable::new(vec![EnemyRange {
                from_level: 1,
                to_level: 150,
                hp_increment: 12.0,
                damage_increment: 4.5,
            }]),
            skill: EnemySkillSpec {
                attribute: "Blinding Light".into(),
                add_description: "Emits a blinding light.".into(),
                duration: 5.0,
                modifier: Modifier::percentage(50.0),
                chance: 0.1,
                radius: 0.0,
            },
            kill_rewards: Some(KillRewardFormula {
                coins: Polynomial::new(vec![Term::ratio(1.0, 1, 1.75), Term::constant(3.0)]),
                xp: Polynomial::new(vec![Term::new(2.2, 1), Term::constant(5.0)]),
            }),
        }
    }

    fn catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![attribute("Blinding Light", "Blinds enemies.")])
    }

    #[test]
    fn firefly_follows_recurrence() {
        let enemy = firefly().generate(&catalog()).unwrap();
        let levels = &enemy.level_mechanics;
        assert_eq!(levels.len(), 150);
        assert_eq!(levels[0].base_hp, 70.0);
        assert_eq!(levels[0].base_hp_regen, 0.21);
        assert_eq!(levels[4].base_hp, 118.0);
        assert_eq!(levels[4].base_hp_regen, 0.35);
        assert_eq!(levels[4].base_damage, 30.0);

        for (index, level) in levels.iter().enumerate() {
            assert_eq!(level.level, index as u32 + 1);
            assert_eq!(level.base_movement_speed, 145.0);
            assert_eq!(level.base_projectile_velocity, 600.0);
            assert_eq!(level.skill.level_mechanics[0].level, level.level);
            assert_eq!(level.skill.attributes[0].name, "Blinding Light");
        }
    }

    #[test]
    fn kill_rewards_floor_formulas() {
        let enemy = firefly().generate(&catalog()).unwrap();
        let rewards = enemy.level_mechanics[6].kill_rewards.unwrap();
        // floor(7 / 1.75 + 3), floor(7 * 2.2 + 5)
        assert_eq!(rewards, KillRewards { coins: 7, xp: 20 });
    }

    #[test]
    fn missing_reward_formula_yields_none() {
        let mut spec = firefly();
        spec.kill_rewards = None;
        let enemy = spec.generate(&catalog()).unwrap();
        assert!(enemy.level_mechanics.iter().all(|l| l.kill_rewards.is_none()));
        assert_eq!(
            enemy.level_mechanics[0].skill.level_mechanics[0].modifier.kind,
            ModifierType::Percentage
        );
    }

    #[test]
    fn unknown_skill_attribute_fails() {
        let err = firefly()
            .generate(&AttributeCatalog::default())
            .unwrap_err();
        assert_eq!(err.error_code(), "ATTRIBUTE_NOT_FOUND");
    }

    #[test]
    fn uncovered_level_fails() {
        let mut spec = firefly();
        spec.max_level = 151;
        let err = spec.generate(&catalog()).unwrap_err();
        assert_eq!(err.level(), Some(151));
    }
}
