// ============================================================================
// Gravity Lookup Interface
// Defines the contract for ingredient gravity sources
// ============================================================================

use crate::error::BrewResult;
use rust_decimal::Decimal;

/// Source of maximum extract gravities, keyed by ingredient name.
///
/// The calculation engine only reads through this trait, so tests and
/// callers can substitute their own tables for the standard one.
/// Implementations: IngredientTable
pub trait GravityLookup: Send + Sync {
    /// Maximum specific gravity one pound of `name` yields in one gallon.
    ///
    /// # Errors
    /// Returns `BrewError::UnknownIngredient` when the name has no entry.
    fn max_gravity(&self, name: &str) -> BrewResult<Decimal>;

    /// Check whether the ingredient is known.
    fn contains(&self, name: &str) -> bool {
        self.max_gravity(name).is_ok()
    }
}

// Lets `&'static` tables (e.g. `IngredientTable::standard()`) be shared as
// `Arc<dyn GravityLookup>` without cloning.
impl<T: GravityLookup + ?Sized> GravityLookup for &T {
    fn max_gravity(&self, name: &str) -> BrewResult<Decimal> {
        (**self).max_gravity(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}
