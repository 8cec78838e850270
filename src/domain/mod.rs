// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod brew_sheet;
pub mod config;
pub mod grain_bill;
pub mod recipe;
pub mod weight;

pub use brew_sheet::BrewSheet;
pub use config::BrewhouseConfig;
pub use grain_bill::{GrainBill, GrainBillEntry};
pub use recipe::{validate_recipe, RecipeGrain};
pub use weight::{PoundsOunces, OUNCES_PER_POUND};
