//! Estimator configuration: tuning constants with documented defaults,
//! loadable from TOML.
//!
//! Every field has a documented default so an empty config is valid; the
//! loader warns and falls back to defaults rather than failing on
//! out-of-range values.

use serde::{Deserialize, Serialize};

use crate::estimator::confidence::{
    HIGH_CONFIDENCE_MIN, LOW_CONFIDENCE_MAX, MARKET_DISTANCE_PENALTY, UNKNOWN_SOURCE_PENALTY,
};

/// Tuning constants for the carbon estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Manufacturing energy per unit in kWh. The reference tables carry
    /// energy-source factors but no per-garment energy baseline, so the
    /// default is 0.0: the declared energy mix stays advisory until a
    /// caller supplies a measured baseline.
    #[serde(default = "default_energy_intensity")]
    pub energy_intensity_kwh_per_unit: f64,

    /// Confidence deduction per material entry with unknown origin.
    #[serde(default = "default_unknown_source_penalty")]
    pub unknown_source_penalty: f64,

    /// Confidence deduction per transport leg priced with the destination
    /// market's canonical distance instead of a declared one.
    #[serde(default = "default_market_distance_penalty")]
    pub market_distance_penalty: f64,

    /// Scores at or above this are High confidence.
    #[serde(default = "default_high_confidence_min")]
    pub high_confidence_min: f64,

    /// Scores below this are Low confidence.
    #[serde(default = "default_low_confidence_max")]
    pub low_confidence_max: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            energy_intensity_kwh_per_unit: default_energy_intensity(),
            unknown_source_penalty: default_unknown_source_penalty(),
            market_distance_penalty: default_market_distance_penalty(),
            high_confidence_min: default_high_confidence_min(),
            low_confidence_max: default_low_confidence_max(),
        }
    }
}

impl EstimatorConfig {
    // Pure function: check a value is finite and not negative
    fn validate_non_negative(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a non-negative number", name))
        }
    }

    /// Validate ranges and threshold ordering.
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_non_negative(self.energy_intensity_kwh_per_unit, "Energy intensity")?;
        Self::validate_non_negative(self.unknown_source_penalty, "Unknown-source penalty")?;
        Self::validate_non_negative(self.market_distance_penalty, "Market-distance penalty")?;
        Self::validate_non_negative(self.low_confidence_max, "Low-confidence threshold")?;
        Self::validate_non_negative(self.high_confidence_min, "High-confidence threshold")?;

        if self.low_confidence_max > self.high_confidence_min {
            return Err(format!(
                "Low-confidence threshold ({}) must not exceed high-confidence threshold ({})",
                self.low_confidence_max, self.high_confidence_min
            ));
        }
        if self.high_confidence_min > 100.0 {
            return Err(format!(
                "High-confidence threshold ({}) must not exceed 100",
                self.high_confidence_min
            ));
        }
        Ok(())
    }
}

// Defaults mirror the documented confidence constants so a TOML file only
// overrides what it names.
fn default_energy_intensity() -> f64 {
    0.0 // advisory-only: no per-garment baseline exists in the reference tables
}
fn default_unknown_source_penalty() -> f64 {
    UNKNOWN_SOURCE_PENALTY
}
fn default_market_distance_penalty() -> f64 {
    MARKET_DISTANCE_PENALTY
}
fn default_high_confidence_min() -> f64 {
    HIGH_CONFIDENCE_MIN
}
fn default_low_confidence_max() -> f64 {
    LOW_CONFIDENCE_MAX
}

/// Pure function to parse and validate config from a TOML string.
///
/// A file that fails to parse is an error; a file that parses but carries
/// invalid values logs a warning and falls back to defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<EstimatorConfig, String> {
    let config = toml::from_str::<EstimatorConfig>(contents)
        .map_err(|e| format!("Failed to parse estimator config: {}", e))?;

    if let Err(e) = config.validate() {
        log::warn!("Invalid estimator config: {}. Using defaults.", e);
        return Ok(EstimatorConfig::default());
    }

    Ok(config)
}
