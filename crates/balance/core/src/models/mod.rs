//! Published record types.
//!
//! Everything here is plain data. Generation lives in [`crate::mechanics`];
//! the types only describe what ends up in a dataset.

/// Routes an enum's serde form through its strum display string.
///
/// Client-facing names such as `"Set Damage"` or `"Self"` are not valid RON
/// identifiers, so these enums read and write as plain strings instead.
macro_rules! string_enum {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = strum::ParseError;

            fn try_from(value: String) -> core::result::Result<Self, Self::Error> {
                value.parse()
            }
        }
    )+};
}

pub mod attribute;
pub mod common;
pub mod cost;
pub mod enemy;
pub mod item;
pub mod player;
pub mod quest;
pub mod requirement;
pub mod skill;
pub mod weapon;

pub use attribute::{Attribute, AttributeType};
pub use common::{Modifier, ModifierType, RangeType, StatusEffect, TargetMechanics, TargetType};
pub use cost::{PurchaseCost, Resource, ResourceCost, UpgradeCost};
pub use enemy::{Enemy, EnemyLevelMechanics, EnemySkill, EnemySkillLevelMechanics, KillRewards};
pub use item::{Item, ItemAttribute, ItemModifier, ItemType, Stat};
pub use player::PlayerLevelMechanics;
pub use quest::{
    CompletionRewards, EnemyVariant, ItemVariant, MiscReward, MiscRewardEntry, Quest,
    QuestRequirements, Requirement,
};
pub use requirement::{LevelRequirement, max_unlocked_level};
pub use skill::{
    DamagingSkill, DamagingSkillLevelMechanics, NonDamagingSkill, NonDamagingSkillLevelMechanics,
    Skill, SkillCategory,
};
pub use weapon::{AttributeInstance, Weapon, WeaponLevelMechanics, WeaponRarity};
