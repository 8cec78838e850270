// ============================================================================
// Brew Calculator Library
// Fixed-point brewing calculations: grain bills, mash water, strike temperatures
// ============================================================================

//! # Brew Calc
//!
//! Recipe calculations for all-grain brewing, carried out in base-10 decimal
//! arithmetic so that chained results (grain weights, water volumes,
//! temperatures) never pick up binary floating-point drift.
//!
//! ## Features
//!
//! - **Round-half-up normalization** to an explicit number of decimal places
//! - **Grain bills** from a target gravity, batch volume and grain ratios
//! - **Mash calculations**: strike water volume/temperature, step infusions
//! - **Water budget**: absorption, boil-off, shrinkage and trub losses
//! - **Standard ingredient table** of maximum extract gravities, swappable
//!   through the [`GravityLookup`](interfaces::GravityLookup) trait
//!
//! ## Example
//!
//! ```rust
//! use brew_calc::prelude::*;
//!
//! let recipe = [
//!     RecipeGrain::new("American Wheat", 0.67, 0.68).unwrap(),
//!     RecipeGrain::new("American Pale (2-Row)", 0.33, 0.68).unwrap(),
//! ];
//!
//! let bill = grain_bill(IngredientTable::standard(), 1.052, 5.5, &recipe).unwrap();
//! for line in format_grain_bill(&bill) {
//!     println!("{}", line);
//! }
//!
//! let planner = BrewPlanner::with_standard_table(BrewhouseConfig::cooler_mash_tun());
//! let sheet = planner.plan(1.052, 5.5, &recipe).unwrap();
//! println!("Strike water: {} qt at {} F", sheet.mash_water, sheet.strike_temp);
//! ```

pub mod domain;
pub mod engine;
pub mod error;
pub mod format;
pub mod interfaces;
pub mod numeric;
pub mod reference;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BrewSheet, BrewhouseConfig, GrainBill, GrainBillEntry, PoundsOunces, RecipeGrain,
    };
    pub use crate::engine::{
        create_from_config, evaporation_loss, expected_yield, grain_absorption, grain_bill,
        grain_qty, grain_weights, infusion_volume, lbs_to_lbs_oz, mash_water_volume,
        required_water_volume, sg_to_ppg, shrinkage_loss, strike_temp, total_grain_weight,
        total_gravity_points, BrewPlanner, BrewPlannerBuilder,
    };
    pub use crate::error::{BrewError, BrewResult};
    pub use crate::format::{format_grain_bill, format_grain_bill_line};
    pub use crate::interfaces::GravityLookup;
    pub use crate::numeric::{normalize, normalize_default, NumericError, ToDecimal};
    pub use crate::reference::IngredientTable;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_end_to_end_brew_day() {
        let planner = BrewPlannerBuilder::new().cooler_mash_tun().build().unwrap();

        let recipe = [
            planner.grain("British Maris Otter Pale", 0.85).unwrap(),
            planner.grain("British Crystal", 0.10).unwrap(),
            planner.grain("British Chocolate", 0.05).unwrap(),
        ];

        let sheet = planner.plan(1.048, 5.5, &recipe).unwrap();
        let lines = sheet.grain_bill_lines();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("British Maris Otter Pale:  "));
        assert!(lines[1].starts_with("British Crystal:  "));
        assert!(lines[2].starts_with("British Chocolate:  "));

        // Strike water is always hotter than the mash target
        assert!(sheet.strike_temp > planner.config().mash_temp);
        // Collected water covers at least the batch plus trub
        assert!(sheet.required_water > sheet.volume);

        // Weigh-out totals stay within rounding of the unrounded total
        let weighed: Decimal = sheet
            .grain_bill
            .iter()
            .map(|entry| entry.weight.to_pounds().unwrap())
            .sum();
        let drift = (weighed - sheet.total_grain_weight).abs();
        assert!(drift < Decimal::from_str("0.01").unwrap());
    }

    #[test]
    fn test_step_mash_chain() {
        // Dough-in at 104 F, then infuse boiling water up to 140 F
        let strike = strike_temp(1, 70, 104).unwrap();
        assert_eq!(strike, Decimal::from_str("110.8").unwrap());

        let water_qt = mash_water_volume(1, 8).unwrap();
        let infusion = infusion_volume(104, 140, 210, water_qt, 8).unwrap();
        assert_eq!(infusion, Decimal::from_str("4.937").unwrap());
    }

    #[test]
    fn test_shared_table_across_threads() {
        let table: Arc<dyn GravityLookup> = Arc::new(IngredientTable::standard());
        let recipe = vec![RecipeGrain::new("American Pale (2-Row)", 1, 0.75).unwrap()];

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = Arc::clone(&table);
                let recipe = recipe.clone();
                thread::spawn(move || grain_bill(table.as_ref(), 1.050, 5, &recipe).unwrap())
            })
            .collect();

        let bills: Vec<GrainBill> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(bills.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_unknown_ingredient_commits_nothing() {
        let recipe = [
            RecipeGrain::new("American Wheat", 0.5, 0.7).unwrap(),
            RecipeGrain::new("Imaginary Malt", 0.5, 0.7).unwrap(),
        ];

        let result = grain_bill(IngredientTable::standard(), 1.050, 5, &recipe);
        assert_eq!(
            result,
            Err(BrewError::UnknownIngredient("Imaginary Malt".to_string()))
        );
    }
}
