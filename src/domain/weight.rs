// ============================================================================
// Weight Domain Model
// Pounds-and-ounces representation of grain weights
// ============================================================================

use crate::numeric::{checked_add, checked_div, normalize, NumericResult, DEFAULT_PLACES};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ounces per pound
pub const OUNCES_PER_POUND: i64 = 16;

/// A weight split into whole pounds and ounces (one decimal place).
///
/// Produced by truncating the fractional pounds and scaling them by 16.
/// Ounces are not carried into pounds, so a value just under a whole pound
/// can read `0 lbs, 16.0 oz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoundsOunces {
    /// Whole pounds (truncated toward zero)
    pub pounds: i64,

    /// Remaining ounces, rounded half-up to one decimal place
    pub ounces: Decimal,
}

impl PoundsOunces {
    pub fn new(pounds: i64, ounces: Decimal) -> Self {
        Self { pounds, ounces }
    }

    /// Convert back to decimal pounds, normalized to three places.
    pub fn to_pounds(&self) -> NumericResult<Decimal> {
        let fraction = checked_div(self.ounces, Decimal::from(OUNCES_PER_POUND))?;
        normalize(
            checked_add(Decimal::from(self.pounds), fraction)?,
            DEFAULT_PLACES,
        )
    }
}

impl fmt::Display for PoundsOunces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lbs, {} oz", self.pounds, self.ounces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let weight = PoundsOunces::new(7, Decimal::new(67, 1));
        assert_eq!(weight.to_string(), "7 lbs, 6.7 oz");

        let even = PoundsOunces::new(3, Decimal::new(120, 1));
        assert_eq!(even.to_string(), "3 lbs, 12.0 oz");
    }

    #[test]
    fn test_to_pounds() {
        let weight = PoundsOunces::new(8, Decimal::new(80, 1));
        assert_eq!(weight.to_pounds().unwrap(), Decimal::new(8500, 3));

        // 10.7 oz = 0.66875 lb -> 0.669
        let weight = PoundsOunces::new(0, Decimal::new(107, 1));
        assert_eq!(weight.to_pounds().unwrap(), Decimal::new(669, 3));
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(
            PoundsOunces::new(8, Decimal::new(80, 1)),
            PoundsOunces::new(8, Decimal::from(8))
        );
    }
}
