// ============================================================================
// Ingredient Table
// Immutable mapping from ingredient name to maximum extract gravity
// ============================================================================

use super::grains::MAX_GRAVITIES;
use crate::error::{BrewError, BrewResult};
use crate::interfaces::GravityLookup;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static STANDARD: LazyLock<IngredientTable> = LazyLock::new(|| {
    IngredientTable::from_entries(
        MAX_GRAVITIES
            .iter()
            .map(|&(name, thousandths)| (name, Decimal::new(thousandths, 3))),
    )
});

/// Read-only table of maximum specific gravities.
///
/// Lookups are exact and case-sensitive. Once built, a table is never
/// mutated, so one instance can be shared freely across threads.
///
/// # Example
/// ```
/// use brew_calc::reference::IngredientTable;
/// use rust_decimal::Decimal;
///
/// let table = IngredientTable::standard();
/// assert_eq!(table.lookup("American Wheat").unwrap(), Decimal::new(1038, 3));
/// assert!(table.lookup("american wheat").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientTable {
    gravities: BTreeMap<String, Decimal>,
}

impl IngredientTable {
    /// The shared standard table, built on first use.
    pub fn standard() -> &'static IngredientTable {
        &STANDARD
    }

    /// Build a table from `(name, max gravity)` pairs.
    ///
    /// Later duplicates replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            gravities: entries
                .into_iter()
                .map(|(name, gravity)| (name.into(), gravity))
                .collect(),
        }
    }

    /// Maximum specific gravity for `name`.
    ///
    /// # Errors
    /// Returns `UnknownIngredient` when the table has no entry for `name`.
    pub fn lookup(&self, name: &str) -> BrewResult<Decimal> {
        self.gravities
            .get(name)
            .copied()
            .ok_or_else(|| BrewError::UnknownIngredient(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.gravities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.gravities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gravities.is_empty()
    }

    /// Ingredient names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.gravities.keys().map(String::as_str)
    }
}

impl GravityLookup for IngredientTable {
    fn max_gravity(&self, name: &str) -> BrewResult<Decimal> {
        self.lookup(name)
    }

    fn contains(&self, name: &str) -> bool {
        IngredientTable::contains(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = IngredientTable::standard();
        assert_eq!(table.len(), MAX_GRAVITIES.len());
        assert!(!table.is_empty());

        assert_eq!(
            table.lookup("American Pale (2-Row)").unwrap(),
            Decimal::new(1037, 3)
        );
        assert_eq!(table.lookup("Maple Sap").unwrap(), Decimal::new(1009, 3));
        assert_eq!(
            table.lookup("Lyle's Golden Syrup").unwrap(),
            Decimal::new(1036, 3)
        );
    }

    #[test]
    fn test_standard_table_is_shared() {
        assert!(std::ptr::eq(
            IngredientTable::standard(),
            IngredientTable::standard()
        ));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = IngredientTable::standard();
        assert_eq!(
            table.lookup("American wheat"),
            Err(BrewError::UnknownIngredient("American wheat".to_string()))
        );
        assert!(table.lookup(" American Wheat").is_err());
        assert!(!table.contains("Unobtainium"));
    }

    #[test]
    fn test_custom_table() {
        let table = IngredientTable::from_entries([
            ("Test Malt", Decimal::new(1040, 3)),
            ("Another Malt", Decimal::new(1030, 3)),
            ("Test Malt", Decimal::new(1041, 3)),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Test Malt").unwrap(), Decimal::new(1041, 3));
        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["Another Malt", "Test Malt"]
        );
    }

    #[test]
    fn test_gravity_lookup_trait() {
        let lookup: &dyn GravityLookup = IngredientTable::standard();
        assert!(lookup.contains("Honey"));
        assert!(lookup.max_gravity("Honey").is_ok());
        assert!(!lookup.contains("honey"));
    }
}
