//! Currency and resource costs.

/// Gatherable resources spent on upgrades.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    Wood,
    Stone,
    Coal,
}

/// An amount of a single resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCost {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub resource: Resource,
    pub amount: u32,
}

impl ResourceCost {
    pub const fn new(resource: Resource, amount: u32) -> Self {
        Self { resource, amount }
    }
}

/// Cost to upgrade a skill or weapon to a level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UpgradeCost {
    pub coins: u64,
    pub energy_cores: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Vec<ResourceCost>,
}

/// Cost to purchase a skill outright. Same shape as an upgrade cost.
pub type PurchaseCost = UpgradeCost;

impl UpgradeCost {
    /// The zero-cost sentinel used for level 1.
    pub const fn free() -> Self {
        Self {
            coins: 0,
            energy_cores: 0,
            resources: Vec::new(),
        }
    }

    pub fn is_free(&self) -> bool {
        self.coins == 0 && self.energy_cores == 0 && self.resources.is_empty()
    }

    /// Amount of `resource` required, 0 when absent.
    pub fn resource_amount(&self, resource: Resource) -> u32 {
        self.resources
            .iter()
            .filter(|cost| cost.resource == resource)
            .map(|cost| cost.amount)
            .sum()
    }
}
