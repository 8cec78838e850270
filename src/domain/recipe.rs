// ============================================================================
// Recipe Domain Model
// Grain specifications supplied by the brewer
// ============================================================================

use crate::numeric::{NumericResult, ToDecimal};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grain in a recipe: its share of the total gravity points and the mash
/// efficiency expected for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecipeGrain {
    /// Ingredient name (must match a gravity table entry exactly)
    pub name: String,

    /// Fraction of the total gravity points contributed by this grain (0.0 - 1.0)
    pub ratio: Decimal,

    /// Expected mash efficiency for this grain (0.0 - 1.0)
    pub efficiency: Decimal,
}

impl RecipeGrain {
    /// Create a recipe grain from any numeric ratio/efficiency.
    ///
    /// # Errors
    /// Fails if either number cannot be converted to a `Decimal`.
    pub fn new(
        name: impl Into<String>,
        ratio: impl ToDecimal,
        efficiency: impl ToDecimal,
    ) -> NumericResult<Self> {
        Ok(Self {
            name: name.into(),
            ratio: ratio.to_decimal()?,
            efficiency: efficiency.to_decimal()?,
        })
    }

    /// Validate ratio and efficiency ranges
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Grain name cannot be empty".to_string());
        }

        if self.ratio < Decimal::ZERO || self.ratio > Decimal::ONE {
            return Err(format!("{}: ratio must be between 0 and 1", self.name));
        }

        if self.efficiency <= Decimal::ZERO || self.efficiency > Decimal::ONE {
            return Err(format!(
                "{}: efficiency must be greater than 0 and at most 1",
                self.name
            ));
        }

        Ok(())
    }
}

/// Validate a full recipe: at least one grain, every grain in range.
pub fn validate_recipe(grains: &[RecipeGrain]) -> Result<(), String> {
    if grains.is_empty() {
        return Err("Recipe must contain at least one grain".to_string());
    }

    grains.iter().try_for_each(RecipeGrain::validate)
}
