//! Weapon level mechanics.

use crate::catalog::AttributeCatalog;
use crate::error::Result;
use crate::growth::{GrowthTable, LevelBand};
use crate::models::{
    AttributeInstance, Modifier, RangeType, Weapon, WeaponLevelMechanics, WeaponRarity,
};
use crate::schedule::CostSchedule;

use super::generator::generate;
use super::instance;

/// Authored definition of one weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    /// Dataset slug, e.g. `commonRustySword`.
    pub slug: String,
    pub name: String,
    pub rarity: WeaponRarity,
    pub description: String,
    pub range_type: RangeType,
    pub max_level: u32,
    pub base_damage: f64,
    pub base_attack_range: f64,
    pub crit_chance: f64,
    pub attributes: Vec<AttributeGrant>,
    pub growth: GrowthTable<WeaponRange>,
    pub upgrade_cost: CostSchedule,
}

/// `damage_increment` is added on entering each level in the band;
/// `base_attack_time` is used as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRange {
    pub from_level: u32,
    pub to_level: u32,
    pub damage_increment: f64,
    pub base_attack_time: f64,
}

impl LevelBand for WeaponRange {
    fn from_level(&self) -> u32 {
        self.from_level
    }

    fn to_level(&self) -> u32 {
        self.to_level
    }
}

/// A catalog attribute at a fixed strength.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeGrant {
    pub name: String,
    pub chance: f64,
    pub modifier: Modifier,
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: f64,
}

impl AttributeGrant {
    fn resolve(&self, catalog: &AttributeCatalog) -> Result<AttributeInstance> {
        instance(catalog, &self.name, self.chance, self.modifier, self.radius)
    }
}

impl WeaponSpec {
    pub fn generate(&self, catalog: &AttributeCatalog) -> Result<Weapon> {
        let base = WeaponLevelMechanics {
            level: 1,
            base_damage: self.base_damage,
            base_attack_range: self.base_attack_range,
            base_attack_time: self.growth.range_for(1)?.base_attack_time,
            crit_chance: self.crit_chance,
            attributes: self.attributes_at(catalog)?,
            upgrade_cost: self.upgrade_cost.cost_for(1)?,
        };

        let level_mechanics = generate(self.max_level, base, |level, previous| {
            let range = self.growth.range_for(level)?;
            Ok(WeaponLevelMechanics {
                level,
                base_damage: previous.base_damage + range.damage_increment,
                base_attack_range: self.base_attack_range,
                base_attack_time: range.base_attack_time,
                crit_chance: self.crit_chance,
                attributes: self.attributes_at(catalog)?,
                upgrade_cost: self.upgrade_cost.cost_for(level)?,
            })
        })?;

        Ok(Weapon {
            name: self.name.clone(),
            rarity: self.rarity,
            description: self.description.clone(),
            range_type: self.range_type,
            level_mechanics,
        })
    }

    fn attributes_at(&self, catalog: &AttributeCatalog) -> Result<Vec<AttributeInstance>> {
        self.attributes
            .iter()
            .map(|grant| grant.resolve(catalog))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::attribute;
    use crate::error::MechanicsError;
    use crate::formula::{Polynomial, Term};
    use crate::models::{Resource, ResourceCost};
    use crate::schedule::CostTier;

    fn range(from_level: u32, to_level: u32, damage: f64, attack_time: f64) -> WeaponRange {
        WeaponRange {
            from_level,
            to_level,
            damage_increment: damage,
            base_attack_time: attack_time,
        }
    }

    fn tier(from_level: u32, to_level: u32, energy_cores: u32, wood: u32) -> CostTier {
        CostTier {
            from_level,
            to_level,
            energy_cores,
            resources: if wood == 0 {
                Vec::new()
            } else {
                vec![ResourceCost::new(Resource::Wood, wood)]
            },
        }
    }

    fn rusty_sword() -> WeaponSpec {
        WeaponSpec {
            slug: "commonRustySword".into(),
            name: "Common Rusty Sword".into(),
            rarity: WeaponRarity::Common,
            description: "Worn and weathered.".into(),
            range_type: RangeType::Melee,
            max_level: 50,
            base_damage: 20.0,
            base_attack_range: 175.0,
            crit_chance: 0.05,
            attributes: vec![AttributeGrant {
                name: "Basic Laceration".into(),
                chance: 0.05,
                modifier: Modifier::percentage(3.0),
                radius: 0.0,
            }],
            growth: GrowthTable::new(vec![
                range(1, 14, 5.0, 1.5),
                range(15, 29, 8.0, 1.45),
                range(30, 39, 10.0, 1.4),
                range(40, 49, 15.0, 1.35),
                range(50, 50, 25.0, 1.25),
            ]),
            upgrade_cost: CostSchedule::new(
                Polynomial::new(vec![Term::new(1.0, 2.25), Term::new(3.0, 1)]),
                vec![
                    tier(1, 14, 0, 0),
                    tier(15, 29, 1, 0),
                    tier(30, 39, 1, 5),
                    tier(40, 45, 2, 15),
                    tier(46, 49, 3, 35),
                    tier(50, 50, 3, 65),
                ],
            ),
        }
    }

    fn catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![attribute("Basic Laceration", "Bleeds.")])
    }

    #[test]
    fn damage_accumulates_per_band() {
        let weapon = rusty_sword().generate(&catalog()).unwrap();
        let levels = &weapon.level_mechanics;
        assert_eq!(levels.len(), 50);
        assert_eq!(levels[0].base_damage, 20.0);
        // 13 steps of 5 inside 1-14
        assert_eq!(levels[13].base_damage, 85.0);
        // then +8 entering 15
        assert_eq!(levels[14].base_damage, 93.0);
        let growth = rusty_sword().growth;
        for pair in levels.windows(2) {
            let increment = growth.range_for(pair[1].level).unwrap().damage_increment;
            assert_eq!(pair[1].base_damage - pair[0].base_damage, increment);
        }
    }

    #[test]
    fn attack_time_is_taken_from_band() {
        let weapon = rusty_sword().generate(&catalog()).unwrap();
        let levels = &weapon.level_mechanics;
        assert_eq!(levels[0].base_attack_time, 1.5);
        assert_eq!(levels[14].base_attack_time, 1.45);
        assert_eq!(levels[49].base_attack_time, 1.25);
        assert!(levels.iter().all(|l| l.base_attack_range == 175.0));
    }

    #[test]
    fn upgrade_costs_follow_tiers() {
        let weapon = rusty_sword().generate(&catalog()).unwrap();
        let levels = &weapon.level_mechanics;
        assert!(levels[0].upgrade_cost.is_free());
        assert_eq!(levels[14].upgrade_cost.energy_cores, 1);
        assert_eq!(levels[49].upgrade_cost.resource_amount(Resource::Wood), 65);
        // floor(2^2.25 + 6)
        assert_eq!(levels[1].upgrade_cost.coins, 10);
    }

    #[test]
    fn attributes_are_resolved_every_level() {
        let weapon = rusty_sword().generate(&catalog()).unwrap();
        for level in &weapon.level_mechanics {
            assert_eq!(level.attributes.len(), 1);
            assert_eq!(level.attributes[0].attribute.name, "Basic Laceration");
            assert_eq!(level.attributes[0].modifier.value, 3.0);
        }
    }

    #[test]
    fn cost_tiers_shorter_than_growth_fail() {
        let mut spec = rusty_sword();
        let mut tiers = spec.upgrade_cost.tiers.clone();
        tiers.retain(|tier| tier.to_level < 46);
        spec.upgrade_cost = CostSchedule::new(spec.upgrade_cost.coins.clone(), tiers);

        let err = spec.generate(&catalog()).unwrap_err();
        assert_eq!(err, MechanicsError::InvalidLevel { level: 46 });
    }

    #[test]
    fn table_shorter_than_max_level_fails() {
        let mut spec = rusty_sword();
        spec.max_level = 51;
        assert_eq!(spec.generate(&catalog()).unwrap_err().level(), Some(51));
    }
}
