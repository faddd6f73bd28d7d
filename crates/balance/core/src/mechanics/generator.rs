//! The level recurrence shared by every entity family.

use crate::error::{MechanicsError, Result};

/// Upper bound on the up-front reservation; longer tables grow as they go.
const RESERVE_LIMIT: u32 = 1024;

/// Builds the table for levels `1..=max_level`.
///
/// `base` becomes level 1 as-is. Every later level is produced by `step` from
/// its level number and the previous record, strictly in order. The first
/// error from `step` aborts the whole table.
pub fn generate<T, F>(max_level: u32, base: T, mut step: F) -> Result<Vec<T>>
where
    F: FnMut(u32, &T) -> Result<T>,
{
    if max_level == 0 {
        return Err(MechanicsError::InvalidMaxLevel { max_level });
    }

    let mut levels = Vec::with_capacity(max_level.min(RESERVE_LIMIT) as usize);
    levels.push(base);
    for level in 2..=max_level {
        let next = step(level, &levels[levels.len() - 1])?;
        levels.push(next);
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_matches_max_level() {
        let levels = generate(150, 70.0, |_, hp| Ok(hp + 12.0)).unwrap();
        assert_eq!(levels.len(), 150);
        assert_eq!(levels[0], 70.0);
        assert_eq!(levels[4], 118.0);
        for pair in levels.windows(2) {
            assert_eq!(pair[1] - pair[0], 12.0);
        }
    }

    #[test]
    fn single_level_is_only_base() {
        let calls = std::cell::Cell::new(0);
        let levels = generate(1, 5u32, |_, v| {
            calls.set(calls.get() + 1);
            Ok(v + 1)
        })
        .unwrap();
        assert_eq!(levels, vec![5]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn step_sees_levels_in_order() {
        let levels = generate(4, 1u32, |level, _| Ok(level)).unwrap();
        assert_eq!(levels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn zero_max_level_is_rejected() {
        let err = generate(0, 1u32, |_, v| Ok(*v)).unwrap_err();
        assert_eq!(err, MechanicsError::InvalidMaxLevel { max_level: 0 });
    }

    #[test]
    fn step_error_aborts() {
        let err = generate(10, 1u32, |level, v| {
            if level == 6 {
                Err(MechanicsError::RangeNotCovered { level })
            } else {
                Ok(v + 1)
            }
        })
        .unwrap_err();
        assert_eq!(err.level(), Some(6));
    }

    #[test]
    fn oversized_max_level_fails_at_first_bad_level() {
        let err = generate(u32::MAX, [0u8; 256], |level, _| {
            if level > 150 {
                Err(MechanicsError::RangeNotCovered { level })
            } else {
                Ok([0u8; 256])
            }
        })
        .unwrap_err();
        assert_eq!(err, MechanicsError::RangeNotCovered { level: 151 });
    }
}
