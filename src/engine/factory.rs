// ============================================================================
// Brew Planner Factory
// Creates brew planners with validated configuration
// ============================================================================

use crate::domain::BrewhouseConfig;
use crate::engine::BrewPlanner;
use crate::error::{BrewError, BrewResult};
use crate::interfaces::GravityLookup;
use crate::reference::IngredientTable;
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a brew planner from configuration
///
/// # Arguments
/// * `config` - Brewhouse configuration
/// * `table` - Gravity source for recipe grains
///
/// # Returns
/// * `BrewResult<BrewPlanner>` - Configured planner or `InvalidConfig`
///
/// # Example
/// ```
/// use brew_calc::prelude::*;
/// use std::sync::Arc;
///
/// let config = BrewhouseConfig::brew_in_a_bag();
/// let planner = create_from_config(config, Arc::new(IngredientTable::standard())).unwrap();
/// ```
pub fn create_from_config(
    config: BrewhouseConfig,
    table: Arc<dyn GravityLookup>,
) -> BrewResult<BrewPlanner> {
    config.validate().map_err(BrewError::InvalidConfig)?;

    Ok(BrewPlanner::new(config, table))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating brew planners with fluent API
///
/// # Example
/// ```
/// use brew_calc::prelude::*;
/// use rust_decimal::Decimal;
///
/// let planner = BrewPlannerBuilder::new()
///     .brew_in_a_bag()
///     .with_mash_efficiency(Decimal::new(72, 2))
///     .with_boil(Decimal::from(90), Decimal::new(12, 1))
///     .build()
///     .unwrap();
/// ```
pub struct BrewPlannerBuilder {
    config: BrewhouseConfig,
    table: Option<Arc<dyn GravityLookup>>,
}

impl BrewPlannerBuilder {
    /// Create a new builder with the default (cooler mash tun) configuration
    pub fn new() -> Self {
        Self {
            config: BrewhouseConfig::new(),
            table: None,
        }
    }

    /// Start from the cooler mash tun preset
    pub fn cooler_mash_tun(mut self) -> Self {
        self.config = BrewhouseConfig::cooler_mash_tun();
        self
    }

    /// Start from the brew in a bag preset
    pub fn brew_in_a_bag(mut self) -> Self {
        self.config = BrewhouseConfig::brew_in_a_bag();
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: BrewhouseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mash_efficiency(mut self, efficiency: Decimal) -> Self {
        self.config = self.config.with_mash_efficiency(efficiency);
        self
    }

    pub fn with_water_grist_ratio(mut self, ratio: Decimal) -> Self {
        self.config = self.config.with_water_grist_ratio(ratio);
        self
    }

    pub fn with_temperatures(mut self, grain_temp: Decimal, mash_temp: Decimal) -> Self {
        self.config = self.config.with_temperatures(grain_temp, mash_temp);
        self
    }

    pub fn with_boil(mut self, minutes: Decimal, evaporation_rate: Decimal) -> Self {
        self.config = self.config.with_boil(minutes, evaporation_rate);
        self
    }

    /// Use a gravity table other than the standard one
    pub fn with_table(mut self, table: Arc<dyn GravityLookup>) -> Self {
        self.table = Some(table);
        self
    }

    /// Validate the configuration and build the planner
    pub fn build(self) -> BrewResult<BrewPlanner> {
        let table = self.table.unwrap_or_else(|| -> Arc<dyn GravityLookup> {
            Arc::new(IngredientTable::standard())
        });
        create_from_config(self.config, table)
    }
}

impl Default for BrewPlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
