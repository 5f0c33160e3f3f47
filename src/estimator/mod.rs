//! Carbon estimator: pure, deterministic derivation of a CO2e assessment
//! from one product snapshot and the emission factor registry.
//!
//! One invocation reads only its own input snapshot and the read-only
//! registry: no I/O, no shared mutable state, no partial results. Either a
//! full [`CarbonAssessmentResult`] is produced or an error surfaces for the
//! caller to render.

pub mod confidence;
pub mod rounding;

use rayon::prelude::*;

use crate::config::EstimatorConfig;
use crate::core::errors::{EstimateError, Result};
use crate::core::{CarbonAssessmentResult, CarbonBreakdown, ProductAssessmentData};
use crate::registry::{FactorRegistry, Taxonomy};

use self::confidence::{score_confidence, TransportFallback};

/// Tolerance for floating-point share sums.
const PERCENT_SUM_TOLERANCE: f64 = 1e-9;

/// Pure assessment calculator over an injected, read-only registry.
pub struct CarbonEstimator<'r> {
    registry: &'r FactorRegistry,
    config: EstimatorConfig,
}

impl<'r> CarbonEstimator<'r> {
    /// Estimator with default configuration (energy mix advisory-only).
    pub fn new(registry: &'r FactorRegistry) -> Self {
        Self {
            registry,
            config: EstimatorConfig::default(),
        }
    }

    /// Estimator with explicit configuration. Rejects invalid configs
    /// up front so every later `assess` call runs against validated
    /// constants.
    pub fn with_config(registry: &'r FactorRegistry, config: EstimatorConfig) -> Result<Self> {
        config.validate().map_err(EstimateError::Configuration)?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Compute a full assessment for one product snapshot.
    pub fn assess(&self, data: &ProductAssessmentData) -> Result<CarbonAssessmentResult> {
        self.validate_input(data)?;

        let weight_kg = data.weight_per_unit_grams / 1000.0;
        let materials = self.materials_component(data, weight_kg)?;
        let production = self.production_component(data)?;
        let energy = self.energy_component(data)?;
        let (transport, fallbacks) = self.transport_component(data)?;

        let per_product = CarbonBreakdown::from_components(materials, production, energy, transport);
        let total_batch = per_product.scaled(f64::from(data.quantity));

        let report = score_confidence(data, &fallbacks, &self.config);
        if report.proxy_used {
            log::debug!(
                "assessment for {} applied {} proxy substitution(s)",
                data.id,
                report.notes.len()
            );
        }

        Ok(CarbonAssessmentResult {
            per_product,
            total_batch,
            confidence_level: report.level,
            confidence_score: report.score,
            proxy_used: report.proxy_used,
            proxy_notes: report.notes,
            scope1: production,
            scope2: energy,
            scope3: materials + transport,
        })
    }

    /// Assess many snapshots in parallel. Safe with no coordination: the
    /// registry is immutable and each computation reads only its own
    /// snapshot. Result order matches input order.
    pub fn assess_many(
        &self,
        batch: &[ProductAssessmentData],
    ) -> Vec<Result<CarbonAssessmentResult>> {
        batch.par_iter().map(|data| self.assess(data)).collect()
    }

    fn validate_input(&self, data: &ProductAssessmentData) -> Result<()> {
        if !(data.weight_per_unit_grams > 0.0) {
            return Err(EstimateError::invalid_input(format!(
                "weight_per_unit_grams must be positive (got {})",
                data.weight_per_unit_grams
            )));
        }
        if data.quantity == 0 {
            return Err(EstimateError::invalid_input("quantity must be positive"));
        }

        Self::validate_shares(
            data.materials.iter().map(|m| (m.id.as_str(), m.percentage)),
            "material",
        )?;
        Self::validate_shares(
            data.energy_sources
                .iter()
                .map(|e| (e.id.as_str(), e.percentage)),
            "energy source",
        )?;

        for leg in &data.transport_legs {
            if let Some(distance) = leg.estimated_distance_km {
                if !(distance >= 0.0) || !distance.is_finite() {
                    return Err(EstimateError::invalid_input(format!(
                        "transport leg {} has an invalid distance ({})",
                        leg.id, distance
                    )));
                }
            }
        }
        Ok(())
    }

    /// Each share must sit in [0, 100] and the shares together must not
    /// exceed 100. A sum below 100 is allowed: the remainder is an
    /// unspecified share that contributes no factor.
    fn validate_shares<'a>(
        shares: impl Iterator<Item = (&'a str, f64)>,
        kind: &str,
    ) -> Result<()> {
        let mut sum = 0.0;
        for (id, percentage) in shares {
            if !(0.0..=100.0).contains(&percentage) {
                return Err(EstimateError::invalid_input(format!(
                    "{} {} percentage must be within [0, 100] (got {})",
                    kind, id, percentage
                )));
            }
            sum += percentage;
        }
        if sum > 100.0 + PERCENT_SUM_TOLERANCE {
            return Err(EstimateError::invalid_input(format!(
                "{} percentages sum to {} (must not exceed 100)",
                kind, sum
            )));
        }
        Ok(())
    }

    /// Mass-share-weighted fiber factors, scaled by unit mass in kg.
    fn materials_component(&self, data: &ProductAssessmentData, weight_kg: f64) -> Result<f64> {
        let mut total = 0.0;
        for material in &data.materials {
            let factor = self
                .registry
                .factor(Taxonomy::Material, &material.material_type)?;
            total += material.percentage / 100.0 * factor * weight_kg;
        }
        // Accessories are informational and do not contribute here.
        Ok(total)
    }

    /// Flat per-garment overhead per declared process, not mass-scaled.
    fn production_component(&self, data: &ProductAssessmentData) -> Result<f64> {
        let mut total = 0.0;
        for process in &data.production_processes {
            total += self.registry.factor(Taxonomy::Production, process)?;
        }
        Ok(total)
    }

    /// Mix-weighted energy factors times the configured per-unit energy
    /// baseline. With the default baseline of 0 the declared mix is
    /// advisory-only, but unknown source keys still fail.
    fn energy_component(&self, data: &ProductAssessmentData) -> Result<f64> {
        let mut weighted = 0.0;
        for source in &data.energy_sources {
            let factor = self.registry.factor(Taxonomy::Energy, &source.source)?;
            weighted += source.percentage / 100.0 * factor;
        }
        Ok(weighted * self.config.energy_intensity_kwh_per_unit)
    }

    /// Distance times mode factor per leg. A leg without a declared
    /// distance falls back to the destination market's canonical distance
    /// and records the substitution; with no market to fall back to the
    /// input is invalid.
    fn transport_component(
        &self,
        data: &ProductAssessmentData,
    ) -> Result<(f64, Vec<TransportFallback>)> {
        let mut total = 0.0;
        let mut fallbacks = Vec::new();
        for leg in &data.transport_legs {
            let factor = self.registry.factor(Taxonomy::Transport, &leg.mode)?;
            let distance = match leg.estimated_distance_km {
                Some(distance) => distance,
                None => {
                    let market = data.destination_market.as_deref().ok_or_else(|| {
                        EstimateError::invalid_input(format!(
                            "transport leg {} has no declared distance and no destination market to fall back to",
                            leg.id
                        ))
                    })?;
                    let distance = self.registry.market_distance_km(market)?;
                    log::debug!(
                        "leg {}: using {} market distance of {} km",
                        leg.id,
                        market,
                        distance
                    );
                    fallbacks.push(TransportFallback {
                        leg_id: leg.id.clone(),
                        mode: leg.mode.clone(),
                        market: market.to_string(),
                        distance_km: distance,
                    });
                    distance
                }
            };
            total += distance * factor;
        }
        Ok((total, fallbacks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MaterialInput, MaterialOrigin, TransportLeg};

    fn estimator() -> CarbonEstimator<'static> {
        CarbonEstimator::new(FactorRegistry::builtin())
    }

    fn base_product() -> ProductAssessmentData {
        let mut data = ProductAssessmentData::new("p1", "Tee", 200.0, 100);
        data.materials = vec![MaterialInput::new(
            "m1",
            "cotton",
            100.0,
            MaterialOrigin::Domestic,
        )];
        data
    }

    #[test]
    fn materials_scale_with_mass_share_and_unit_weight() {
        let result = estimator().assess(&base_product()).unwrap();
        // 0.2 kg x 8.0 kg CO2e/kg
        assert_eq!(result.per_product.materials, 1.6);
    }

    #[test]
    fn material_shortfall_leaves_remainder_unattributed() {
        let mut data = base_product();
        data.materials[0].percentage = 50.0;
        let result = estimator().assess(&data).unwrap();
        assert_eq!(result.per_product.materials, 0.8);
    }

    #[test]
    fn production_is_flat_per_process() {
        let mut data = base_product();
        data.production_processes = vec!["cutting_sewing".to_string(), "dyeing".to_string()];
        let result = estimator().assess(&data).unwrap();
        assert_eq!(result.per_product.production, 2.0);
    }

    #[test]
    fn energy_is_advisory_with_default_baseline() {
        let mut data = base_product();
        data.energy_sources = vec![crate::core::EnergySourceInput::new("e1", "grid", 100.0)];
        let result = estimator().assess(&data).unwrap();
        assert_eq!(result.per_product.energy, 0.0);
        // The key is still validated even though the term is zero.
        data.energy_sources[0].source = "fusion".to_string();
        assert!(estimator().assess(&data).unwrap_err().is_unknown_key());
    }

    #[test]
    fn energy_contributes_with_a_configured_baseline() {
        let mut data = base_product();
        data.energy_sources = vec![crate::core::EnergySourceInput::new("e1", "grid", 100.0)];
        let config = EstimatorConfig {
            energy_intensity_kwh_per_unit: 2.0,
            ..EstimatorConfig::default()
        };
        let estimator = CarbonEstimator::with_config(FactorRegistry::builtin(), config).unwrap();
        let result = estimator.assess(&data).unwrap();
        // 1.0 x 0.62 kg CO2e/kWh x 2.0 kWh
        assert_eq!(result.per_product.energy, 1.24);
    }

    #[test]
    fn transport_fallback_requires_a_destination_market() {
        let mut data = base_product();
        data.transport_legs = vec![TransportLeg::new("t1", "sea", None)];
        let err = estimator().assess(&data).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn rejects_out_of_range_shares() {
        let mut data = base_product();
        data.materials[0].percentage = 120.0;
        assert!(estimator().assess(&data).unwrap_err().is_invalid_input());

        let mut data = base_product();
        data.materials.push(MaterialInput::new(
            "m2",
            "polyester",
            30.0,
            MaterialOrigin::Domestic,
        ));
        // 100 + 30 exceeds the share budget.
        assert!(estimator().assess(&data).unwrap_err().is_invalid_input());
    }

    #[test]
    fn rejects_non_positive_weight_and_quantity() {
        let mut data = base_product();
        data.weight_per_unit_grams = 0.0;
        assert!(estimator().assess(&data).unwrap_err().is_invalid_input());

        let mut data = base_product();
        data.quantity = 0;
        assert!(estimator().assess(&data).unwrap_err().is_invalid_input());
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = EstimatorConfig {
            market_distance_penalty: -1.0,
            ..EstimatorConfig::default()
        };
        assert!(CarbonEstimator::with_config(FactorRegistry::builtin(), config).is_err());
    }
}
