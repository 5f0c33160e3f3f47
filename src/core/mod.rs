pub mod errors;
pub mod versioning;

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::estimator::rounding::round2;

/// Where a declared material was sourced from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialOrigin {
    Domestic,
    Imported,
    /// Unknown origin is proxy data and lowers the confidence score.
    Unknown,
}

/// One entry in a product's bill of materials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    pub id: String,
    /// Registry key, e.g. `cotton` or `recycled_polyester`.
    pub material_type: String,
    /// Share of product mass, 0-100. Entries for one product should sum to
    /// at most 100; any shortfall is an unspecified share that contributes
    /// no factor.
    pub percentage: f64,
    pub origin: MaterialOrigin,
    #[serde(default)]
    pub certifications: BTreeSet<String>,
}

impl MaterialInput {
    pub fn new(
        id: impl Into<String>,
        material_type: impl Into<String>,
        percentage: f64,
        origin: MaterialOrigin,
    ) -> Self {
        Self {
            id: id.into(),
            material_type: material_type.into(),
            percentage,
            origin,
            certifications: BTreeSet::new(),
        }
    }
}

/// Trims, buttons, zippers and the like. Informational only: accessory
/// weight is not part of the emissions sum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessoryInput {
    pub id: String,
    pub name: String,
    pub accessory_type: String,
    pub weight_grams: Option<f64>,
}

/// One entry in the production energy mix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergySourceInput {
    pub id: String,
    /// Registry key, e.g. `grid` or `solar`.
    pub source: String,
    /// Share of the energy mix, 0-100.
    pub percentage: f64,
}

impl EnergySourceInput {
    pub fn new(id: impl Into<String>, source: impl Into<String>, percentage: f64) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            percentage,
        }
    }
}

/// One leg of the shipment route, in travel order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportLeg {
    pub id: String,
    /// Registry key: `road`, `sea`, `air` or `rail`.
    pub mode: String,
    /// Declared distance in km. When absent, the destination market's
    /// canonical distance is substituted and flagged as proxy data.
    pub estimated_distance_km: Option<f64>,
}

impl TransportLeg {
    pub fn new(id: impl Into<String>, mode: impl Into<String>, distance_km: Option<f64>) -> Self {
        Self {
            id: id.into(),
            mode: mode.into(),
            estimated_distance_km: distance_km,
        }
    }
}

/// Draft/published state of an assessment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    Draft,
    Published,
}

impl Default for AssessmentStatus {
    fn default() -> Self {
        AssessmentStatus::Draft
    }
}

/// Aggregate root for one product assessment: everything the estimator
/// reads, plus workflow state. Treated as an immutable snapshot during
/// calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductAssessmentData {
    pub id: String,
    pub name: String,
    pub weight_per_unit_grams: f64,
    pub quantity: u32,
    /// Registry market key, e.g. `usa`. Needed when any transport leg omits
    /// its distance.
    pub destination_market: Option<String>,
    #[serde(default)]
    pub materials: Vec<MaterialInput>,
    #[serde(default)]
    pub accessories: Vec<AccessoryInput>,
    /// Registry process keys in production order.
    #[serde(default)]
    pub production_processes: Vec<String>,
    #[serde(default)]
    pub energy_sources: Vec<EnergySourceInput>,
    #[serde(default)]
    pub transport_legs: Vec<TransportLeg>,
    #[serde(default)]
    pub status: AssessmentStatus,
    #[serde(default)]
    pub version: u32,
}

impl ProductAssessmentData {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight_per_unit_grams: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight_per_unit_grams,
            quantity,
            destination_market: None,
            materials: Vec::new(),
            accessories: Vec::new(),
            production_processes: Vec::new(),
            energy_sources: Vec::new(),
            transport_legs: Vec::new(),
            status: AssessmentStatus::Draft,
            version: 0,
        }
    }
}

/// Per-component CO2e in kg. `total` is always the sum of the four
/// components, never set independently.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonBreakdown {
    pub materials: f64,
    pub production: f64,
    pub energy: f64,
    pub transport: f64,
    pub total: f64,
}

impl CarbonBreakdown {
    pub fn from_components(materials: f64, production: f64, energy: f64, transport: f64) -> Self {
        Self {
            materials,
            production,
            energy,
            transport,
            total: materials + production + energy + transport,
        }
    }

    /// Scale every field by a batch quantity. The scaled total comes from
    /// the unrounded per-unit total, so batch rounding never compounds
    /// per-component rounding error.
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            materials: self.materials * quantity,
            production: self.production * quantity,
            energy: self.energy * quantity,
            transport: self.transport * quantity,
            total: self.total * quantity,
        }
    }

    /// Two-decimal display view. Each field rounds from its own unrounded
    /// value; the total is not re-summed from rounded components.
    pub fn rounded(&self) -> Self {
        Self {
            materials: round2(self.materials),
            production: round2(self.production),
            energy: round2(self.energy),
            transport: round2(self.transport),
            total: round2(self.total),
        }
    }
}

/// Bucketed confidence in an assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,   // score >= high threshold
    Medium, // between the thresholds
    Low,    // score < low threshold
}

impl ConfidenceLevel {
    pub fn from_score(score: f64, high_min: f64, low_max: f64) -> Self {
        match score {
            s if s >= high_min => ConfidenceLevel::High,
            s if s < low_max => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

/// Outcome of one assessment. Immutable once produced; recalculation yields
/// a fresh value attached to a new draft version. Values are stored at full
/// precision; use [`CarbonAssessmentResult::rounded`] for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonAssessmentResult {
    pub per_product: CarbonBreakdown,
    pub total_batch: CarbonBreakdown,
    pub confidence_level: ConfidenceLevel,
    /// 0-100; starts at 100 and loses a deduction per proxy-derived input.
    pub confidence_score: f64,
    /// True iff any documented fallback was substituted for a missing or
    /// unknown declared value.
    pub proxy_used: bool,
    /// One human-readable note per penalized input, in declaration order.
    pub proxy_notes: Vector<String>,
    /// Direct process emissions, kg CO2e per unit.
    pub scope1: f64,
    /// Purchased-energy emissions, kg CO2e per unit.
    pub scope2: f64,
    /// Value-chain emissions (materials + transport), kg CO2e per unit.
    pub scope3: f64,
}

impl CarbonAssessmentResult {
    /// Two-decimal display view, rounded once from the unrounded values.
    pub fn rounded(&self) -> Self {
        Self {
            per_product: self.per_product.rounded(),
            total_batch: self.total_batch.rounded(),
            confidence_score: round2(self.confidence_score),
            scope1: round2(self.scope1),
            scope2: round2(self.scope2),
            scope3: round2(self.scope3),
            ..self.clone()
        }
    }
}
