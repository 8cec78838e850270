// ============================================================================
// Water Calculations
// Losses across the brew day and total water requirement
// ============================================================================

use crate::error::BrewResult;
use crate::numeric::{checked_add, checked_div, checked_mul, normalize, ToDecimal, DEFAULT_PLACES};
use rust_decimal::Decimal;

/// Fraction of volume lost as hot wort cools
pub const SHRINKAGE_FACTOR: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

const MINUTES_PER_HOUR: i64 = 60;

/// Gallons of water retained by the spent grain.
pub fn grain_absorption(
    grains_weight: impl ToDecimal,
    absorption_rate: impl ToDecimal,
) -> BrewResult<Decimal> {
    Ok(normalize(
        checked_mul(grains_weight.to_decimal()?, absorption_rate.to_decimal()?)?,
        DEFAULT_PLACES,
    )?)
}

/// Gallons boiled off over `boil_minutes` at `evaporation_rate` gal/hr.
pub fn evaporation_loss(
    boil_minutes: impl ToDecimal,
    evaporation_rate: impl ToDecimal,
) -> BrewResult<Decimal> {
    let hours = checked_div(boil_minutes.to_decimal()?, Decimal::from(MINUTES_PER_HOUR))?;
    Ok(normalize(
        checked_mul(hours, evaporation_rate.to_decimal()?)?,
        DEFAULT_PLACES,
    )?)
}

/// Gallons lost to thermal contraction when `volume` cools.
pub fn shrinkage_loss(volume: impl ToDecimal) -> BrewResult<Decimal> {
    Ok(normalize(
        checked_mul(volume.to_decimal()?, SHRINKAGE_FACTOR)?,
        DEFAULT_PLACES,
    )?)
}

/// Total gallons of water to start with so that `target_volume` is left in
/// the fermenter.
///
/// Losses accumulate in order: trub, shrinkage of that volume, boil-off,
/// equipment losses, then grain absorption.
pub fn required_water_volume(
    target_volume: impl ToDecimal,
    grains_weight: impl ToDecimal,
    absorption_rate: impl ToDecimal,
    equipment_losses: impl ToDecimal,
    boil_minutes: impl ToDecimal,
    evaporation_rate: impl ToDecimal,
    trub_loss: impl ToDecimal,
) -> BrewResult<Decimal> {
    let mut total = checked_add(target_volume.to_decimal()?, trub_loss.to_decimal()?)?;
    total = checked_add(total, shrinkage_loss(total)?)?;
    total = checked_add(total, evaporation_loss(boil_minutes, evaporation_rate)?)?;
    total = checked_add(total, equipment_losses.to_decimal()?)?;
    total = checked_add(total, grain_absorption(grains_weight, absorption_rate)?)?;

    Ok(normalize(total, DEFAULT_PLACES)?)
}
