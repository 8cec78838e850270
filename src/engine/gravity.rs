// ============================================================================
// Gravity Calculations
// Specific gravity, gravity points and expected extract yields
// ============================================================================

use crate::error::BrewResult;
use crate::numeric::{checked_mul, checked_sub, normalize, NumericError, ToDecimal, DEFAULT_PLACES};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Gravity points per whole unit of specific gravity above water
const POINTS_PER_UNIT: i64 = 1000;

/// Convert a specific gravity into gravity points (PPG).
///
/// The gravity is first normalized to three places, then the points are
/// truncated toward zero, never rounded.
///
/// # Example
/// ```
/// use brew_calc::engine::sg_to_ppg;
///
/// assert_eq!(sg_to_ppg(1.050).unwrap(), 50);
/// assert_eq!(sg_to_ppg(1.035).unwrap(), 35);
/// ```
pub fn sg_to_ppg(gravity: impl ToDecimal) -> BrewResult<i64> {
    let gravity = normalize(gravity, DEFAULT_PLACES)?;
    let points = checked_mul(
        checked_sub(gravity, Decimal::ONE)?,
        Decimal::from(POINTS_PER_UNIT),
    )?;

    Ok(points.trunc().to_i64().ok_or(NumericError::Overflow)?)
}

/// Total gravity points for a batch: `sg_to_ppg(gravity) × gallons`.
pub fn total_gravity_points(gravity: impl ToDecimal, gallons: impl ToDecimal) -> BrewResult<Decimal> {
    let points = Decimal::from(sg_to_ppg(gravity)?);
    Ok(normalize(
        checked_mul(points, gallons.to_decimal()?)?,
        DEFAULT_PLACES,
    )?)
}

/// Expected yield of a grain given its maximum yield (PPG) and mash efficiency.
pub fn expected_yield(max_yield: impl ToDecimal, efficiency: impl ToDecimal) -> BrewResult<Decimal> {
    Ok(normalize(
        checked_mul(max_yield.to_decimal()?, efficiency.to_decimal()?)?,
        DEFAULT_PLACES,
    )?)
}
