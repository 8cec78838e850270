// ============================================================================
// Brewhouse Configuration
// Equipment and process parameters used when planning a brew day
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equipment and process parameters for a brewhouse.
///
/// Temperatures are in °F, volumes in gallons unless noted, weights in pounds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrewhouseConfig {
    /// Default mash efficiency applied to recipe grains (0.0 - 1.0)
    pub mash_efficiency: Decimal,

    /// Strike water to grist ratio, in quarts per pound
    pub water_grist_ratio: Decimal,

    /// Temperature of the dry grain before mashing in
    pub grain_temp: Decimal,

    /// Target mash rest temperature
    pub mash_temp: Decimal,

    /// Water retained by spent grain, in gallons per pound
    pub absorption_rate: Decimal,

    /// Dead space and transfer losses, in gallons
    pub equipment_losses: Decimal,

    /// Boil length in minutes
    pub boil_minutes: Decimal,

    /// Boil-off rate, in gallons per hour
    pub evaporation_rate: Decimal,

    /// Volume left behind with the trub, in gallons
    pub trub_loss: Decimal,
}

impl BrewhouseConfig {
    /// Create a configuration for a typical cooler mash tun setup
    pub fn new() -> Self {
        Self {
            mash_efficiency: Decimal::new(75, 2),
            water_grist_ratio: Decimal::new(125, 2),
            grain_temp: Decimal::from(70),
            mash_temp: Decimal::from(152),
            absorption_rate: Decimal::new(125, 3),
            equipment_losses: Decimal::new(5, 1),
            boil_minutes: Decimal::from(60),
            evaporation_rate: Decimal::new(15, 1),
            trub_loss: Decimal::new(5, 1),
        }
    }

    /// Builder method: Set default mash efficiency
    pub fn with_mash_efficiency(mut self, efficiency: Decimal) -> Self {
        self.mash_efficiency = efficiency;
        self
    }

    /// Builder method: Set water to grist ratio (qt/lb)
    pub fn with_water_grist_ratio(mut self, ratio: Decimal) -> Self {
        self.water_grist_ratio = ratio;
        self
    }

    /// Builder method: Set grain and target mash temperatures
    pub fn with_temperatures(mut self, grain_temp: Decimal, mash_temp: Decimal) -> Self {
        self.grain_temp = grain_temp;
        self.mash_temp = mash_temp;
        self
    }

    /// Builder method: Set grain absorption rate (gal/lb)
    pub fn with_absorption_rate(mut self, rate: Decimal) -> Self {
        self.absorption_rate = rate;
        self
    }

    /// Builder method: Set equipment losses (gal)
    pub fn with_equipment_losses(mut self, losses: Decimal) -> Self {
        self.equipment_losses = losses;
        self
    }

    /// Builder method: Set boil length (min) and evaporation rate (gal/hr)
    pub fn with_boil(mut self, minutes: Decimal, evaporation_rate: Decimal) -> Self {
        self.boil_minutes = minutes;
        self.evaporation_rate = evaporation_rate;
        self
    }

    /// Builder method: Set trub loss (gal)
    pub fn with_trub_loss(mut self, loss: Decimal) -> Self {
        self.trub_loss = loss;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.mash_efficiency <= Decimal::ZERO || self.mash_efficiency > Decimal::ONE {
            return Err("Mash efficiency must be greater than 0 and at most 1".to_string());
        }

        if self.water_grist_ratio <= Decimal::ZERO {
            return Err("Water to grist ratio must be positive".to_string());
        }

        if self.mash_temp <= self.grain_temp {
            return Err("Mash temperature must be above grain temperature".to_string());
        }

        let non_negative = [
            (self.absorption_rate, "Absorption rate"),
            (self.equipment_losses, "Equipment losses"),
            (self.boil_minutes, "Boil length"),
            (self.evaporation_rate, "Evaporation rate"),
            (self.trub_loss, "Trub loss"),
        ];
        for (value, label) in non_negative {
            if value < Decimal::ZERO {
                return Err(format!("{} cannot be negative", label));
            }
        }

        Ok(())
    }
}

impl Default for BrewhouseConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl BrewhouseConfig {
    /// Cooler mash tun with a false bottom
    /// - 1.25 qt/lb mash
    /// - 0.125 gal/lb absorption
    /// - 0.5 gal dead space
    pub fn cooler_mash_tun() -> Self {
        Self::new()
    }

    /// Brew in a bag, full-volume mash
    /// - Thin mash (2.5 qt/lb)
    /// - Squeezed bag absorbs less (0.045 gal/lb)
    /// - No separate tun, no dead space
    pub fn brew_in_a_bag() -> Self {
        Self::new()
            .with_mash_efficiency(Decimal::new(70, 2))
            .with_water_grist_ratio(Decimal::new(25, 1))
            .with_absorption_rate(Decimal::new(45, 3))
            .with_equipment_losses(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BrewhouseConfig::default();
        assert_eq!(config, BrewhouseConfig::cooler_mash_tun());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BrewhouseConfig::new()
            .with_water_grist_ratio(Decimal::new(15, 1))
            .with_boil(Decimal::from(90), Decimal::from(1))
            .with_trub_loss(Decimal::new(25, 2));

        assert_eq!(config.water_grist_ratio, Decimal::new(15, 1));
        assert_eq!(config.boil_minutes, Decimal::from(90));
        assert_eq!(config.evaporation_rate, Decimal::ONE);
        assert_eq!(config.trub_loss, Decimal::new(25, 2));
    }

    #[test]
    fn test_validation() {
        let zero_ratio = BrewhouseConfig::new().with_water_grist_ratio(Decimal::ZERO);
        assert!(zero_ratio.validate().is_err());

        let over_efficient = BrewhouseConfig::new().with_mash_efficiency(Decimal::new(11, 1));
        assert!(over_efficient.validate().is_err());

        let cold_mash =
            BrewhouseConfig::new().with_temperatures(Decimal::from(70), Decimal::from(60));
        assert!(cold_mash.validate().is_err());

        let negative_loss = BrewhouseConfig::new().with_equipment_losses(Decimal::from(-1));
        assert_eq!(
            negative_loss.validate(),
            Err("Equipment losses cannot be negative".to_string())
        );
    }

    #[test]
    fn test_preset_configs() {
        let biab = BrewhouseConfig::brew_in_a_bag();
        assert_eq!(biab.equipment_losses, Decimal::ZERO);
        assert!(biab.absorption_rate < BrewhouseConfig::cooler_mash_tun().absorption_rate);
        assert!(biab.validate().is_ok());
    }
}
