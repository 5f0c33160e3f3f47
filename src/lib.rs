// Export modules for library usage
pub mod config;
pub mod core;
pub mod estimator;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{
    errors::{EstimateError, Result},
    versioning::{DraftHistory, DraftVersion},
    AccessoryInput, AssessmentStatus, CarbonAssessmentResult, CarbonBreakdown, ConfidenceLevel,
    EnergySourceInput, MaterialInput, MaterialOrigin, ProductAssessmentData, TransportLeg,
};

pub use crate::config::{parse_and_validate_config, EstimatorConfig};

pub use crate::estimator::{
    confidence::{ConfidenceReport, TransportFallback},
    rounding::round2,
    CarbonEstimator,
};

pub use crate::registry::{FactorOption, FactorRegistry, MarketOption, Taxonomy};
