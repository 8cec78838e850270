// ============================================================================
// Brew Planner
// Chains the calculation engine into a complete brew day sheet
// ============================================================================

use super::grain::{grain_bill, grain_weights, lbs_to_lbs_oz, total_grain_weight};
use super::mash::{infusion_volume, mash_water_volume, strike_temp};
use super::water::required_water_volume;
use crate::domain::{
    validate_recipe, BrewSheet, BrewhouseConfig, GrainBill, GrainBillEntry, RecipeGrain,
};
use crate::error::{BrewError, BrewResult};
use crate::interfaces::GravityLookup;
use crate::numeric::{normalize, ToDecimal, DEFAULT_PLACES};
use crate::reference::IngredientTable;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, warn};

/// Brew day planner for one brewhouse configuration.
///
/// Holds an immutable configuration and a shared gravity table; every
/// operation is a pure calculation, so one planner can serve many threads.
pub struct BrewPlanner {
    /// Equipment and process parameters
    config: BrewhouseConfig,

    /// Maximum gravity source for recipe grains
    table: Arc<dyn GravityLookup>,
}

impl BrewPlanner {
    /// Create a new planner
    pub fn new(config: BrewhouseConfig, table: Arc<dyn GravityLookup>) -> Self {
        Self { config, table }
    }

    /// Create a planner backed by the standard ingredient table
    pub fn with_standard_table(config: BrewhouseConfig) -> Self {
        Self::new(config, Arc::new(IngredientTable::standard()))
    }

    pub fn config(&self) -> &BrewhouseConfig {
        &self.config
    }

    /// Recipe grain using the configured mash efficiency
    pub fn grain(&self, name: impl Into<String>, ratio: impl ToDecimal) -> BrewResult<RecipeGrain> {
        Ok(RecipeGrain::new(name, ratio, self.config.mash_efficiency)?)
    }

    /// Grain bill for a recipe, using the configured gravity table
    pub fn grain_bill(
        &self,
        target_gravity: impl ToDecimal,
        volume: impl ToDecimal,
        recipe: &[RecipeGrain],
    ) -> BrewResult<GrainBill> {
        grain_bill(self.table.as_ref(), target_gravity, volume, recipe)
            .inspect_err(|err| warn!(error = %err, "grain bill calculation failed"))
    }

    /// Plan a complete brew day for the recipe.
    ///
    /// # Errors
    /// - `InvalidRecipe` if the recipe is empty or has out-of-range values
    /// - `UnknownIngredient` if a grain is missing from the gravity table
    /// - `Numeric` for conversion failures and zero denominators
    pub fn plan(
        &self,
        target_gravity: impl ToDecimal,
        volume: impl ToDecimal,
        recipe: &[RecipeGrain],
    ) -> BrewResult<BrewSheet> {
        self.build_sheet(target_gravity, volume, recipe)
            .inspect_err(|err| warn!(error = %err, grains = recipe.len(), "brew plan failed"))
    }

    /// Infusion water (qt) for a step mash rest.
    pub fn infusion_for_step(
        &self,
        current_temp: impl ToDecimal,
        step_temp: impl ToDecimal,
        infusion_temp: impl ToDecimal,
        water_in_mash: impl ToDecimal,
        grain_in_mash: impl ToDecimal,
    ) -> BrewResult<Decimal> {
        let volume = infusion_volume(
            current_temp,
            step_temp,
            infusion_temp,
            water_in_mash,
            grain_in_mash,
        )?;
        debug!(infusion_qt = %volume, "step infusion calculated");
        Ok(volume)
    }

    fn build_sheet(
        &self,
        target_gravity: impl ToDecimal,
        volume: impl ToDecimal,
        recipe: &[RecipeGrain],
    ) -> BrewResult<BrewSheet> {
        validate_recipe(recipe).map_err(BrewError::InvalidRecipe)?;

        let target_gravity = target_gravity.to_decimal()?;
        let volume = volume.to_decimal()?;
        let config = &self.config;

        let weights = grain_weights(self.table.as_ref(), target_gravity, volume, recipe)?;
        let total_weight = total_grain_weight(&weights)?;
        let bill = weights
            .into_iter()
            .map(|(name, pounds)| -> BrewResult<GrainBillEntry> {
                Ok(GrainBillEntry::new(name, lbs_to_lbs_oz(pounds)?))
            })
            .collect::<BrewResult<GrainBill>>()?;

        let mash_water = mash_water_volume(config.water_grist_ratio, total_weight)?;
        let strike = strike_temp(config.water_grist_ratio, config.grain_temp, config.mash_temp)?;
        let required_water = required_water_volume(
            volume,
            total_weight,
            config.absorption_rate,
            config.equipment_losses,
            config.boil_minutes,
            config.evaporation_rate,
            config.trub_loss,
        )?;

        let sheet = BrewSheet::new(
            normalize(target_gravity, DEFAULT_PLACES)?,
            normalize(volume, DEFAULT_PLACES)?,
            bill,
            total_weight,
            mash_water,
            strike,
            required_water,
        );

        debug!(
            sheet_id = %sheet.id,
            grains = sheet.grain_bill.len(),
            total_grain_lb = %sheet.total_grain_weight,
            mash_water_qt = %sheet.mash_water,
            strike_temp_f = %sheet.strike_temp,
            required_water_gal = %sheet.required_water,
            "brew sheet planned"
        );

        Ok(sheet)
    }
}
