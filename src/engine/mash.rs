// ============================================================================
// Mash Calculations
// Strike water volume and temperature, step infusions
// ============================================================================

use crate::error::BrewResult;
use crate::numeric::{
    checked_add, checked_div, checked_mul, checked_sub, normalize, ToDecimal, DEFAULT_PLACES,
};
use rust_decimal::Decimal;

/// Relative heat capacity of grain versus water, in quarts of water per
/// pound of grain (empirical mash tun approximation).
pub const GRAIN_HEAT_CAPACITY: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Strike water volume in quarts for a water-to-grist ratio (qt/lb).
pub fn mash_water_volume(
    water_grist_ratio: impl ToDecimal,
    grains_weight: impl ToDecimal,
) -> BrewResult<Decimal> {
    Ok(normalize(
        checked_mul(water_grist_ratio.to_decimal()?, grains_weight.to_decimal()?)?,
        DEFAULT_PLACES,
    )?)
}

/// Strike water temperature needed to land the mash at `target_temp`.
///
/// `(0.2 / ratio) × (target − initial) + target`
///
/// # Errors
/// Returns `DivisionByZero` when the water-to-grist ratio is zero.
///
/// # Example
/// ```
/// use brew_calc::engine::strike_temp;
/// use rust_decimal::Decimal;
///
/// assert_eq!(strike_temp(1, 70, 104).unwrap(), Decimal::new(1108, 1));
/// ```
pub fn strike_temp(
    water_grist_ratio: impl ToDecimal,
    initial_temp: impl ToDecimal,
    target_temp: impl ToDecimal,
) -> BrewResult<Decimal> {
    let target = target_temp.to_decimal()?;
    let rise = checked_sub(target, initial_temp.to_decimal()?)?;
    let factor = checked_div(GRAIN_HEAT_CAPACITY, water_grist_ratio.to_decimal()?)?;

    Ok(normalize(
        checked_add(checked_mul(factor, rise)?, target)?,
        DEFAULT_PLACES,
    )?)
}

/// Quarts of water at `infusion_temp` needed to raise the mash from
/// `initial_temp` to `target_temp`.
///
/// `(target − initial) × (0.2 × grain + water) / (infusion − target)`
///
/// # Errors
/// Returns `DivisionByZero` when the infusion water is already at the target
/// temperature.
pub fn infusion_volume(
    initial_temp: impl ToDecimal,
    target_temp: impl ToDecimal,
    infusion_temp: impl ToDecimal,
    water_in_mash: impl ToDecimal,
    grain_in_mash: impl ToDecimal,
) -> BrewResult<Decimal> {
    let target = target_temp.to_decimal()?;
    let rise = checked_sub(target, initial_temp.to_decimal()?)?;
    let mash_mass = checked_add(
        checked_mul(GRAIN_HEAT_CAPACITY, grain_in_mash.to_decimal()?)?,
        water_in_mash.to_decimal()?,
    )?;
    let differential = checked_sub(infusion_temp.to_decimal()?, target)?;

    Ok(normalize(
        checked_div(checked_mul(rise, mash_mass)?, differential)?,
        DEFAULT_PLACES,
    )?)
}
