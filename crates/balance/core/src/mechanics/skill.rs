//! Damaging and non-damaging skill level mechanics.
//!
//! Both families share the same recurrence for cooldown (reduced by a fixed
//! amount each level) and the same per-level cost schedule. They differ in
//! what their growth bands drive: damaging skills accumulate damage and scale
//! their attribute modifier, non-damaging skills only scale the modifier.

use crate::catalog::AttributeCatalog;
use crate::error::Result;
use crate::growth::{GrowthTable, LevelBand, ScalingBand};
use crate::models::{
    AttributeInstance, DamagingSkill, DamagingSkillLevelMechanics, Modifier, ModifierType,
    NonDamagingSkill, NonDamagingSkillLevelMechanics, PurchaseCost, RangeType, Skill,
    SkillCategory, TargetMechanics,
};
use crate::schedule::CostSchedule;

use super::generator::generate;
use super::instance;

/// Fields every skill carries regardless of family.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProfile {
    /// Dataset slug, e.g. `swordSlam`.
    pub slug: String,
    pub name: String,
    pub description: String,
    pub target_mechanics: TargetMechanics,
    pub range_type: RangeType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: f64,
    pub max_level: u32,
    pub cast_time: f64,
    pub cooldown: f64,
    /// Subtracted from the cooldown on every level up.
    pub cooldown_reduction: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: f64,
    pub purchase_cost: PurchaseCost,
    pub upgrade_cost: CostSchedule,
}

impl SkillProfile {
    fn publish<L>(&self, level_mechanics: Vec<L>) -> Skill<L> {
        Skill {
            name: self.name.clone(),
            description: self.description.clone(),
            target_mechanics: self.target_mechanics,
            range_type: self.range_type,
            range: self.range,
            purchase_cost: self.purchase_cost.clone(),
            level_mechanics,
        }
    }
}

/// How a skill's catalog attribute is attached at each level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillAttributeSpec {
    pub name: String,
    pub modifier_kind: ModifierType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: f64,
}

impl SkillAttributeSpec {
    fn at<R: ScalingBand>(
        &self,
        catalog: &AttributeCatalog,
        growth: &GrowthTable<R>,
        level: u32,
        chance: f64,
    ) -> Result<AttributeInstance> {
        let modifier = Modifier::new(self.modifier_kind, growth.scaled_value(level)?);
        instance(catalog, &self.name, chance, modifier, self.radius)
    }
}

// ============================================================================
// Damaging skills
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamagingSkillRange {
    pub from_level: u32,
    pub to_level: u32,
    pub damage_increment: f64,
    pub attribute_chance: f64,
    /// Attribute modifier at `from_level`.
    pub base_attribute_modifier: f64,
    pub attribute_modifier_increment: f64,
}

impl LevelBand for DamagingSkillRange {
    fn from_level(&self) -> u32 {
        self.from_level
    }

    fn to_level(&self) -> u32 {
        self.to_level
    }
}

impl ScalingBand for DamagingSkillRange {
    fn base(&self) -> f64 {
        self.base_attribute_modifier
    }

    fn increment(&self) -> f64 {
        self.attribute_modifier_increment
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamagingSkillSpec {
    pub profile: SkillProfile,
    pub base_damage: f64,
    pub attribute: SkillAttributeSpec,
    pub growth: GrowthTable<DamagingSkillRange>,
}

impl DamagingSkillSpec {
    pub const CATEGORY: SkillCategory = SkillCategory::Damaging;

    pub fn generate(&self, catalog: &AttributeCatalog) -> Result<DamagingSkill> {
        let profile = &self.profile;
        let base = DamagingSkillLevelMechanics {
            level: 1,
            base_damage: self.base_damage,
            base_skill_cast_time: profile.cast_time,
            duration: profile.duration,
            cooldown: profile.cooldown,
            attributes: vec![self.attribute_at(catalog, 1)?],
            upgrade_cost: profile.upgrade_cost.cost_for(1)?,
        };

        let level_mechanics = generate(profile.max_level, base, |level, previous| {
            let range = self.growth.range_for(level)?;
            Ok(DamagingSkillLevelMechanics {
                level,
                base_damage: previous.base_damage + range.damage_increment,
                base_skill_cast_time: profile.cast_time,
                duration: profile.duration,
                cooldown: previous.cooldown - profile.cooldown_reduction,
                attributes: vec![self.attribute_at(catalog, level)?],
                upgrade_cost: profile.upgrade_cost.cost_for(level)?,
            })
        })?;

        Ok(profile.publish(level_mechanics))
    }

    fn attribute_at(&self, catalog: &AttributeCatalog, level: u32) -> Result<AttributeInstance> {
        let chance = self.growth.range_for(level)?.attribute_chance;
        self.attribute.at(catalog, &self.growth, level, chance)
    }
}

// ============================================================================
// Non-damaging skills
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonDamagingSkillRange {
    pub from_level: u32,
    pub to_level: u32,
    pub attribute_chance: f64,
    /// Modifier at `from_level`.
    pub base_modifier: f64,
    pub modifier_increment: f64,
}

impl LevelBand for NonDamagingSkillRange {
    fn from_level(&self) -> u32 {
        self.from_level
    }

    fn to_level(&self) -> u32 {
        self.to_level
    }
}

impl ScalingBand for NonDamagingSkillRange {
    fn base(&self) -> f64 {
        self.base_modifier
    }

    fn increment(&self) -> f64 {
        self.modifier_increment
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonDamagingSkillSpec {
    pub profile: SkillProfile,
    pub attribute: SkillAttributeSpec,
    pub growth: GrowthTable<NonDamagingSkillRange>,
}

impl NonDamagingSkillSpec {
    pub const CATEGORY: SkillCategory = SkillCategory::NonDamaging;

    pub fn generate(&self, catalog: &AttributeCatalog) -> Result<NonDamagingSkill> {
        let profile = &self.profile;
        let base = NonDamagingSkillLevelMechanics {
            level: 1,
            base_skill_cast_time: profile.cast_time,
            duration: profile.duration,
            cooldown: profile.cooldown,
            attributes: vec![self.attribute_at(catalog, 1)?],
            upgrade_cost: profile.upgrade_cost.cost_for(1)?,
        };

        let level_mechanics = generate(profile.max_level, base, |level, previous| {
            Ok(NonDamagingSkillLevelMechanics {
                level,
                base_skill_cast_time: profile.cast_time,
                duration: profile.duration,
                cooldown: previous.cooldown - profile.cooldown_reduction,
                attributes: vec![self.attribute_at(catalog, level)?],
                upgrade_cost: profile.upgrade_cost.cost_for(level)?,
            })
        })?;

        Ok(profile.publish(level_mechanics))
    }

    fn attribute_at(&self, catalog: &AttributeCatalog, level: u32) -> Result<AttributeInstance> {
        let chance = self.growth.range_for(level)?.attribute_chance;
        self.attribute.at(catalog, &self.growth, level, chance)
    }
}
