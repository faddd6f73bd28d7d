//! Quest records.

use super::cost::Resource;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Quest {
    pub chapter: u32,
    /// Unique within its chapter.
    pub id: u32,
    pub name: String,
    pub description: String,
    /// `None` means the quest has no requirements (typically "reach an area").
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub requirements: Option<QuestRequirements>,
    pub completion_rewards: CompletionRewards,
}

impl Quest {
    /// `(chapter, id)` identifies a quest across the catalog.
    pub const fn key(&self) -> (u32, u32) {
        (self.chapter, self.id)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QuestRequirements {
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources_required: Vec<Requirement<Resource>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items_required: Vec<Requirement<ItemVariant>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies_required: Vec<Requirement<EnemyVariant>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub kills_required: Option<u32>,
}

/// An amount of one kind of thing a quest asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirement<K> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: K,
    pub amount: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum ItemVariant {
    Blueberry,
    #[strum(serialize = "Energy Core")]
    EnergyCore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyVariant {
    Trufo,
    Firefly,
    Golem,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionRewards {
    pub coins: u64,
    pub xp: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub misc: Vec<MiscRewardEntry>,
}

/// A non-currency reward such as a skill, a weapon or raw resources.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiscRewardEntry {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MiscReward,
    /// Empty when the reward is purely quantitative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Only meaningful for skills and weapons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u32,
    pub amount: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum MiscReward {
    Skill,
    Wood,
    Stone,
    Coal,
    #[strum(serialize = "Energy Cores")]
    EnergyCores,
    Weapon,
}

string_enum!(ItemVariant, MiscReward);
