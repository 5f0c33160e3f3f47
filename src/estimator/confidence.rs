//! Confidence scoring: how much of an assessment rests on documented data
//! versus proxy substitutions.
//!
//! The score starts at 100 and loses a visible deduction per proxy-derived
//! input. Notes follow input declaration order: materials first, then
//! transport legs.

use im::Vector;

use crate::config::EstimatorConfig;
use crate::core::{ConfidenceLevel, MaterialOrigin, ProductAssessmentData};

/// Default deduction per material entry with unknown origin.
pub const UNKNOWN_SOURCE_PENALTY: f64 = 10.0;

/// Default deduction per transport leg priced with the market-distance
/// fallback. Larger than the material penalty: a substituted distance moves
/// the transport component itself, not just its attribution. A single
/// fallback is enough to drop an otherwise clean assessment out of High.
pub const MARKET_DISTANCE_PENALTY: f64 = 25.0;

/// Default score floor for High confidence (score >= this is High).
pub const HIGH_CONFIDENCE_MIN: f64 = 80.0;

/// Default score ceiling for Low confidence (score < this is Low).
pub const LOW_CONFIDENCE_MAX: f64 = 50.0;

/// Record of one market-distance substitution made while pricing a
/// transport leg.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportFallback {
    pub leg_id: String,
    pub mode: String,
    pub market: String,
    pub distance_km: f64,
}

/// Outcome of the confidence pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceReport {
    pub score: f64,
    pub level: ConfidenceLevel,
    pub proxy_used: bool,
    pub notes: Vector<String>,
}

/// Score an assessment's inputs. Every penalty strictly lowers the score
/// (down to a floor of 0) and appends one human-readable note.
pub fn score_confidence(
    data: &ProductAssessmentData,
    transport_fallbacks: &[TransportFallback],
    config: &EstimatorConfig,
) -> ConfidenceReport {
    let mut score = 100.0;
    let mut notes = Vector::new();

    for material in &data.materials {
        if material.origin == MaterialOrigin::Unknown {
            score -= config.unknown_source_penalty;
            notes.push_back(format!(
                "Material {} ({}): origin unknown, sourcing treated as proxy data",
                material.id, material.material_type
            ));
        }
    }

    for fallback in transport_fallbacks {
        score -= config.market_distance_penalty;
        notes.push_back(format!(
            "Transport leg {} ({}): no declared distance, used {} market distance of {} km",
            fallback.leg_id, fallback.mode, fallback.market, fallback.distance_km
        ));
    }

    let score = score.max(0.0);
    ConfidenceReport {
        score,
        level: ConfidenceLevel::from_score(
            score,
            config.high_confidence_min,
            config.low_confidence_max,
        ),
        proxy_used: !notes.is_empty(),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MaterialInput;

    fn product_with_materials(materials: Vec<MaterialInput>) -> ProductAssessmentData {
        let mut data = ProductAssessmentData::new("p1", "Tee", 200.0, 10);
        data.materials = materials;
        data
    }

    #[test]
    fn fully_documented_input_scores_100_and_high() {
        let data = product_with_materials(vec![MaterialInput::new(
            "m1",
            "cotton",
            100.0,
            MaterialOrigin::Domestic,
        )]);
        let report = score_confidence(&data, &[], &EstimatorConfig::default());
        assert_eq!(report.score, 100.0);
        assert_eq!(report.level, ConfidenceLevel::High);
        assert!(!report.proxy_used);
        assert!(report.notes.is_empty());
    }

    #[test]
    fn unknown_origin_deducts_per_entry() {
        let data = product_with_materials(vec![
            MaterialInput::new("m1", "cotton", 60.0, MaterialOrigin::Unknown),
            MaterialInput::new("m2", "polyester", 40.0, MaterialOrigin::Unknown),
        ]);
        let report = score_confidence(&data, &[], &EstimatorConfig::default());
        assert_eq!(report.score, 80.0);
        assert_eq!(report.level, ConfidenceLevel::High);
        assert!(report.proxy_used);
        assert_eq!(report.notes.len(), 2);
    }

    #[test]
    fn market_fallback_deducts_more_than_unknown_origin() {
        let data = product_with_materials(vec![MaterialInput::new(
            "m1",
            "cotton",
            100.0,
            MaterialOrigin::Domestic,
        )]);
        let fallback = TransportFallback {
            leg_id: "t1".to_string(),
            mode: "sea".to_string(),
            market: "usa".to_string(),
            distance_km: 14000.0,
        };
        let report = score_confidence(&data, &[fallback], &EstimatorConfig::default());
        assert_eq!(report.score, 75.0);
        assert_eq!(report.level, ConfidenceLevel::Medium);
        assert!(report.proxy_used);
        assert_eq!(report.notes.len(), 1);
        assert!(report.notes[0].contains("t1"));
        assert!(report.notes[0].contains("14000"));
    }

    #[test]
    fn notes_follow_declaration_order_materials_then_transport() {
        let data = product_with_materials(vec![
            MaterialInput::new("m1", "cotton", 50.0, MaterialOrigin::Unknown),
            MaterialInput::new("m2", "linen", 50.0, MaterialOrigin::Unknown),
        ]);
        let fallback = TransportFallback {
            leg_id: "t1".to_string(),
            mode: "sea".to_string(),
            market: "uk".to_string(),
            distance_km: 8700.0,
        };
        let report = score_confidence(&data, &[fallback], &EstimatorConfig::default());
        assert!(report.notes[0].contains("m1"));
        assert!(report.notes[1].contains("m2"));
        assert!(report.notes[2].contains("t1"));
    }

    #[test]
    fn score_floors_at_zero() {
        let materials = (0..12)
            .map(|i| {
                MaterialInput::new(format!("m{}", i), "cotton", 5.0, MaterialOrigin::Unknown)
            })
            .collect();
        let data = product_with_materials(materials);
        let report = score_confidence(&data, &[], &EstimatorConfig::default());
        assert_eq!(report.score, 0.0);
        assert_eq!(report.level, ConfidenceLevel::Low);
    }
}
