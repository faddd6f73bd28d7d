//! Level formulas used for coins, xp and rounding.
//!
//! Designers express per-level currency curves as small polynomials:
//!
//! ```ignore
//! // floor(8.3 * level^3 + 10 * level + 25)
//! Polynomial::new(vec![Term::new(8.3, 3), Term::new(10.0, 1), Term::constant(25.0)])
//!
//! // floor(level / 1.75 + 3)
//! Polynomial::new(vec![Term::ratio(1.0, 1, 1.75), Term::constant(3.0)])
//! ```

// ============================================================================
// Polynomial
// ============================================================================

/// One `coefficient * level^exponent / divisor` term.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub coefficient: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exponent: f64,
    #[cfg_attr(feature = "serde", serde(default = "unit_divisor"))]
    pub divisor: f64,
}

#[cfg(feature = "serde")]
fn unit_divisor() -> f64 {
    1.0
}

impl Term {
    pub fn new(coefficient: f64, exponent: impl Into<f64>) -> Self {
        Self {
            coefficient,
            exponent: exponent.into(),
            divisor: 1.0,
        }
    }

    /// A term divided by `divisor`, evaluated as a true division so that
    /// `level / 1.75` floors the same way the designers compute it.
    pub fn ratio(coefficient: f64, exponent: impl Into<f64>, divisor: f64) -> Self {
        Self {
            divisor,
            ..Self::new(coefficient, exponent)
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    pub fn evaluate(&self, level: u32) -> f64 {
        let level = f64::from(level);
        let raised = if self.exponent == 0.0 {
            1.0
        } else if self.exponent.fract() == 0.0 {
            level.powi(self.exponent as i32)
        } else {
            level.powf(self.exponent)
        };
        self.coefficient * raised / self.divisor
    }
}

/// A sum of [`Term`]s in the level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polynomial {
    pub terms: Vec<Term>,
}

impl Polynomial {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn evaluate(&self, level: u32) -> f64 {
        self.terms.iter().map(|term| term.evaluate(level)).sum()
    }

    /// Floors the value and clamps negatives to 0.
    pub fn floor(&self, level: u32) -> u64 {
        let value = self.evaluate(level).floor();
        if value <= 0.0 { 0 } else { value as u64 }
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball_coins() -> Polynomial {
        Polynomial::new(vec![
            Term::new(8.3, 3),
            Term::new(10.0, 1),
            Term::constant(25.0),
        ])
    }

    #[test]
    fn cubic_coin_curve() {
        assert_eq!(fireball_coins().floor(2), 111);
        assert_eq!(fireball_coins().floor(10), 8425);
    }

    #[test]
    fn ratio_term_divides_level() {
        let coins = Polynomial::new(vec![Term::ratio(1.0, 1, 1.75), Term::constant(3.0)]);
        assert_eq!(coins.floor(1), 3);
        assert_eq!(coins.floor(7), 7);
    }

    #[test]
    fn fractional_exponent() {
        // floor(2^2.25 + 3 * 2)
        let coins = Polynomial::new(vec![Term::new(1.0, 2.25), Term::new(3.0, 1)]);
        assert_eq!(coins.floor(2), 10);
    }

    #[test]
    fn round2_matches_two_decimals() {
        assert_eq!(round2(0.21), 0.21);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(118.0 * 0.003), 0.35);
    }
}
