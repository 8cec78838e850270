// ============================================================================
// Grain Bill Domain Model
// ============================================================================

use super::weight::PoundsOunces;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One line of a grain bill: an ingredient and how much of it to weigh out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrainBillEntry {
    /// Ingredient name as it appears in the gravity table
    pub name: String,

    /// Weight to use
    pub weight: PoundsOunces,
}

impl GrainBillEntry {
    pub fn new(name: impl Into<String>, weight: PoundsOunces) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

impl fmt::Display for GrainBillEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:  {}", self.name, self.weight)
    }
}

/// Ordered grain bill, in the same order as the recipe it was computed from.
pub type GrainBill = SmallVec<[GrainBillEntry; 8]>;
