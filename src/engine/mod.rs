// ============================================================================
// Engine Module
// Contains the brewing calculation engine
// ============================================================================

mod grain;
mod gravity;
mod mash;
mod planner;
mod water;

pub mod factory;

pub use factory::{create_from_config, BrewPlannerBuilder};
pub use grain::{grain_bill, grain_qty, grain_weights, lbs_to_lbs_oz, total_grain_weight};
pub use gravity::{expected_yield, sg_to_ppg, total_gravity_points};
pub use mash::{infusion_volume, mash_water_volume, strike_temp, GRAIN_HEAT_CAPACITY};
pub use planner::BrewPlanner;
pub use water::{
    evaporation_loss, grain_absorption, required_water_volume, shrinkage_loss, SHRINKAGE_FACTOR,
};
