//! Piecewise growth tables keyed by level range.
//!
//! A table is a list of inclusive `[from_level, to_level]` bands, each
//! carrying the per-level deltas for one entity family. Lookups scan the
//! whole table and keep the last containing band, so a later band overrides an
//! earlier overlapping one. Strict builds call
//! [`GrowthTable::validate_coverage`] first to reject such overlaps.

use crate::error::{MechanicsError, Result};

/// An inclusive level band.
pub trait LevelBand {
    fn from_level(&self) -> u32;
    fn to_level(&self) -> u32;

    fn contains(&self, level: u32) -> bool {
        self.from_level() <= level && level <= self.to_level()
    }
}

/// A band that also carries a `base + increment * (level - from)` formula.
pub trait ScalingBand: LevelBand {
    fn base(&self) -> f64;
    fn increment(&self) -> f64;
}

/// Ordered growth bands for one entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GrowthTable<R> {
    ranges: Vec<R>,
}

impl<R> Default for GrowthTable<R> {
    fn default() -> Self {
        Self { ranges: Vec::new() }
    }
}

impl<R: LevelBand> GrowthTable<R> {
    pub fn new(ranges: Vec<R>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[R] {
        &self.ranges
    }

    /// Returns the band containing `level`; the last one when several do.
    pub fn range_for(&self, level: u32) -> Result<&R> {
        let mut found = None;
        for range in &self.ranges {
            if range.contains(level) {
                found = Some(range);
            }
        }
        found.ok_or(MechanicsError::RangeNotCovered { level })
    }

    /// Checks that the bands tile `[1, max_level]` exactly once, in order.
    pub fn validate_coverage(&self, max_level: u32) -> Result<()> {
        let Some(first) = self.ranges.first() else {
            return Err(MechanicsError::malformed("growth table is empty"));
        };
        if first.from_level() != 1 {
            return Err(MechanicsError::malformed(format!(
                "growth table starts at level {} instead of 1",
                first.from_level()
            )));
        }

        let mut expected_from = 1;
        for range in &self.ranges {
            let (from, to) = (range.from_level(), range.to_level());
            if from > to {
                return Err(MechanicsError::malformed(format!(
                    "growth range {from}-{to} is inverted"
                )));
            }
            if from < expected_from {
                return Err(MechanicsError::malformed(format!(
                    "growth range {from}-{to} overlaps the previous range"
                )));
            }
            if from > expected_from {
                return Err(MechanicsError::malformed(format!(
                    "levels {expected_from}-{} are not covered",
                    from - 1
                )));
            }
            expected_from = to.saturating_add(1);
        }

        if expected_from <= max_level {
            return Err(MechanicsError::malformed(format!(
                "growth table ends at level {} but max level is {max_level}",
                expected_from - 1
            )));
        }
        Ok(())
    }
}

impl<R: ScalingBand> GrowthTable<R> {
    /// Evaluates the band formula at `level`.
    ///
    /// Level 1 always yields the first band's base value.
    pub fn scaled_value(&self, level: u32) -> Result<f64> {
        if level == 1 {
            return self
                .ranges
                .first()
                .map(ScalingBand::base)
                .ok_or(MechanicsError::RangeNotCovered { level });
        }
        let range = self.range_for(level)?;
        Ok(range.base() + range.increment() * f64::from(level - range.from_level()))
    }
}
