// ============================================================================
// Brew Sheet Domain Model
// ============================================================================

use super::grain_bill::GrainBill;
use crate::format::format_grain_bill;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed on brew day for one recipe at one batch size
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrewSheet {
    /// Unique sheet identifier
    pub id: Uuid,

    /// Target original gravity
    pub target_gravity: Decimal,

    /// Target post-boil volume (gal)
    pub volume: Decimal,

    /// Grains to weigh out, in recipe order
    pub grain_bill: GrainBill,

    /// Sum of the unrounded grain weights (lb)
    pub total_grain_weight: Decimal,

    /// Strike water volume (qt)
    pub mash_water: Decimal,

    /// Strike water temperature (°F)
    pub strike_temp: Decimal,

    /// Total water to collect before brewing (gal)
    pub required_water: Decimal,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl BrewSheet {
    pub fn new(
        target_gravity: Decimal,
        volume: Decimal,
        grain_bill: GrainBill,
        total_grain_weight: Decimal,
        mash_water: Decimal,
        strike_temp: Decimal,
        required_water: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            target_gravity,
            volume,
            grain_bill,
            total_grain_weight,
            mash_water,
            strike_temp,
            required_water,
            created_at: Utc::now(),
        }
    }

    /// Grain bill lines ready for display
    pub fn grain_bill_lines(&self) -> Vec<String> {
        format_grain_bill(&self.grain_bill)
    }

    /// Serialize the sheet as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
