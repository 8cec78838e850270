// ============================================================================
// Brew Errors
// Crate-level error type returned by the calculation engine and planner
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised by recipe calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrewError {
    /// Decimal conversion or arithmetic failure
    Numeric(NumericError),
    /// Ingredient name has no entry in the gravity table
    UnknownIngredient(String),
    /// Recipe data failed validation before planning
    InvalidRecipe(String),
    /// Brewhouse configuration failed validation
    InvalidConfig(String),
}

impl fmt::Display for BrewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrewError::Numeric(err) => write!(f, "{}", err),
            BrewError::UnknownIngredient(name) => write!(f, "unknown ingredient: {}", name),
            BrewError::InvalidRecipe(reason) => write!(f, "invalid recipe: {}", reason),
            BrewError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for BrewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrewError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for BrewError {
    fn from(err: NumericError) -> Self {
        BrewError::Numeric(err)
    }
}

/// Result type alias for recipe calculations
pub type BrewResult<T> = Result<T, BrewError>;
