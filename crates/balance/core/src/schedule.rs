//! Tiered upgrade cost schedules.

use crate::error::{MechanicsError, Result};
use crate::formula::Polynomial;
use crate::growth::LevelBand;
use crate::models::{ResourceCost, UpgradeCost};

/// Energy cores and resources charged for every level in a band.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTier {
    pub from_level: u32,
    pub to_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_cores: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: Vec<ResourceCost>,
}

impl LevelBand for CostTier {
    fn from_level(&self) -> u32 {
        self.from_level
    }

    fn to_level(&self) -> u32 {
        self.to_level
    }
}

/// Coin curve plus the tier table for one skill or weapon.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostSchedule {
    pub coins: Polynomial,
    pub tiers: Vec<CostTier>,
}

impl CostSchedule {
    pub fn new(coins: Polynomial, tiers: Vec<CostTier>) -> Self {
        Self { coins, tiers }
    }

    /// Cost of upgrading to `level`.
    ///
    /// Level 1 is what the player starts with and always costs nothing.
    pub fn cost_for(&self, level: u32) -> Result<UpgradeCost> {
        if level == 1 {
            return Ok(UpgradeCost::free());
        }
        let tier = self
            .tiers
            .iter()
            .rev()
            .find(|tier| tier.contains(level))
            .ok_or(MechanicsError::InvalidLevel { level })?;

        Ok(UpgradeCost {
            coins: self.coins.floor(level),
            energy_cores: tier.energy_cores,
            resources: tier.resources.clone(),
        })
    }

    /// Checks that tiers cover `[2, max_level]` in order without overlap and
    /// never ask for fewer energy cores than the tier before.
    pub fn validate(&self, max_level: u32) -> Result<()> {
        let mut previous: Option<&CostTier> = None;
        for tier in &self.tiers {
            if tier.from_level > tier.to_level {
                return Err(MechanicsError::malformed(format!(
                    "cost tier {}-{} is inverted",
                    tier.from_level, tier.to_level
                )));
            }
            if let Some(previous) = previous {
                if tier.from_level <= previous.to_level {
                    return Err(MechanicsError::malformed(format!(
                        "cost tier {}-{} overlaps tier {}-{}",
                        tier.from_level, tier.to_level, previous.from_level, previous.to_level
                    )));
                }
                if tier.energy_cores < previous.energy_cores {
                    return Err(MechanicsError::malformed(format!(
                        "cost tier {}-{} asks for fewer energy cores than tier {}-{}",
                        tier.from_level, tier.to_level, previous.from_level, previous.to_level
                    )));
                }
            }
            previous = Some(tier);
        }

        let uncovered = (2..=max_level).find(|level| !self.tiers.iter().any(|t| t.contains(*level)));
        if let Some(level) = uncovered {
            return Err(MechanicsError::malformed(format!(
                "level {level} is not covered by any cost tier"
            )));
        }
        Ok(())
    }
}
