//! Emission factor registry: factor and label lookups for the four
//! category taxonomies, plus destination-market and certification
//! reference tables.
//!
//! The registry is read-only after construction and is passed by reference
//! to the estimator, so calculation correctness never depends on UI-side
//! concerns. Both the `{key -> factor}` map and the ordered `{key, label}`
//! picker list are generated from one authoring row, so reordering a
//! display list can never reorder lookup semantics.

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::errors::{EstimateError, Result};

/// The four factor-bearing category groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    Material,
    Production,
    Energy,
    Transport,
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Taxonomy::Material => "material",
            Taxonomy::Production => "production process",
            Taxonomy::Energy => "energy source",
            Taxonomy::Transport => "transport mode",
        };
        f.write_str(name)
    }
}

/// One picker entry, in the registry's fixed authoring order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorOption {
    pub key: String,
    pub label: String,
}

/// One destination market with its canonical shipping distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketOption {
    pub key: String,
    pub label: String,
    pub distance_km: f64,
}

/// Lookup map and display list for one taxonomy, built from the same
/// authoring rows.
#[derive(Clone, Debug, Default)]
struct TaxonomyTable {
    factors: HashMap<String, f64>,
    options: Vec<FactorOption>,
}

impl TaxonomyTable {
    fn from_rows(rows: &[(&str, &str, f64)]) -> Self {
        let factors = rows
            .iter()
            .map(|(key, _, factor)| (key.to_string(), *factor))
            .collect();
        let options = rows
            .iter()
            .map(|(key, label, _)| FactorOption {
                key: key.to_string(),
                label: label.to_string(),
            })
            .collect();
        Self { factors, options }
    }
}

/// Read-only emission factor registry.
#[derive(Clone, Debug)]
pub struct FactorRegistry {
    materials: TaxonomyTable,
    production: TaxonomyTable,
    energy: TaxonomyTable,
    transport: TaxonomyTable,
    markets: Vec<MarketOption>,
    market_distances: HashMap<String, f64>,
    certifications: Vec<FactorOption>,
}

impl FactorRegistry {
    /// Build a registry from explicit authoring rows. Tests use this to pin
    /// factors without depending on the built-in tables.
    pub fn from_tables(
        materials: &[(&str, &str, f64)],
        production: &[(&str, &str, f64)],
        energy: &[(&str, &str, f64)],
        transport: &[(&str, &str, f64)],
        markets: &[(&str, &str, f64)],
        certifications: &[(&str, &str)],
    ) -> Self {
        Self {
            materials: TaxonomyTable::from_rows(materials),
            production: TaxonomyTable::from_rows(production),
            energy: TaxonomyTable::from_rows(energy),
            transport: TaxonomyTable::from_rows(transport),
            markets: markets
                .iter()
                .map(|(key, label, distance_km)| MarketOption {
                    key: key.to_string(),
                    label: label.to_string(),
                    distance_km: *distance_km,
                })
                .collect(),
            market_distances: markets
                .iter()
                .map(|(key, _, distance_km)| (key.to_string(), *distance_km))
                .collect(),
            certifications: certifications
                .iter()
                .map(|(key, label)| FactorOption {
                    key: key.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// Shared registry built once from the compile-time authoring tables.
    pub fn builtin() -> &'static FactorRegistry {
        static REGISTRY: OnceLock<FactorRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            log::debug!("building built-in emission factor registry");
            FactorRegistry::from_tables(
                tables::MATERIALS,
                tables::PRODUCTION_PROCESSES,
                tables::ENERGY_SOURCES,
                tables::TRANSPORT_MODES,
                tables::DESTINATION_MARKETS,
                tables::CERTIFICATIONS,
            )
        })
    }

    fn table(&self, taxonomy: Taxonomy) -> &TaxonomyTable {
        match taxonomy {
            Taxonomy::Material => &self.materials,
            Taxonomy::Production => &self.production,
            Taxonomy::Energy => &self.energy,
            Taxonomy::Transport => &self.transport,
        }
    }

    /// Emission factor for `key`. Fails with `UnknownKey` when the taxonomy
    /// has no such entry; callers must surface that as an input-validation
    /// error, not a zero contribution.
    pub fn factor(&self, taxonomy: Taxonomy, key: &str) -> Result<f64> {
        self.table(taxonomy)
            .factors
            .get(key)
            .copied()
            .ok_or_else(|| EstimateError::unknown_key(taxonomy.to_string(), key))
    }

    pub fn contains(&self, taxonomy: Taxonomy, key: &str) -> bool {
        self.table(taxonomy).factors.contains_key(key)
    }

    /// Picker entries in fixed authoring order (stable, never sorted).
    pub fn options(&self, taxonomy: Taxonomy) -> &[FactorOption] {
        &self.table(taxonomy).options
    }

    /// Canonical shipping distance for a destination market, used as the
    /// documented proxy when a transport leg omits its distance.
    pub fn market_distance_km(&self, key: &str) -> Result<f64> {
        self.market_distances
            .get(key)
            .copied()
            .ok_or_else(|| EstimateError::unknown_key("destination market", key))
    }

    /// Destination markets in authoring order.
    pub fn markets(&self) -> &[MarketOption] {
        &self.markets
    }

    /// Certifications carry labels only; there is no numeric factor to
    /// look up.
    pub fn certifications(&self) -> &[FactorOption] {
        &self.certifications
    }

    pub fn certification_label(&self, key: &str) -> Option<&str> {
        self.certifications
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn material_options_preserve_authoring_order() {
        let registry = FactorRegistry::builtin();
        let keys: Vec<&str> = registry
            .options(Taxonomy::Material)
            .iter()
            .map(|option| option.key.as_str())
            .collect();
        assert_eq!(&keys[..3], &["cotton", "organic_cotton", "polyester"]);
    }

    #[test]
    fn every_option_has_a_factor_and_vice_versa() {
        let registry = FactorRegistry::builtin();
        for taxonomy in [
            Taxonomy::Material,
            Taxonomy::Production,
            Taxonomy::Energy,
            Taxonomy::Transport,
        ] {
            let options = registry.options(taxonomy);
            for option in options {
                assert!(registry.factor(taxonomy, &option.key).is_ok());
            }
            assert_eq!(options.len(), registry.table(taxonomy).factors.len());
        }
    }

    #[test]
    fn factor_lookup_matches_authoring_rows() {
        let registry = FactorRegistry::builtin();
        assert_eq!(registry.factor(Taxonomy::Material, "cotton").unwrap(), 8.0);
        assert_eq!(
            registry
                .factor(Taxonomy::Production, "cutting_sewing")
                .unwrap(),
            0.8
        );
        assert_eq!(registry.factor(Taxonomy::Transport, "sea").unwrap(), 0.016);
    }

    #[test]
    fn unknown_key_is_an_error_not_a_zero() {
        let registry = FactorRegistry::builtin();
        let err = registry
            .factor(Taxonomy::Material, "unobtainium")
            .unwrap_err();
        assert!(err.is_unknown_key());
        assert_eq!(err.to_string(), "Unknown material key: \"unobtainium\"");
    }

    #[test]
    fn market_distance_lookup_and_rejection() {
        let registry = FactorRegistry::builtin();
        assert_eq!(registry.market_distance_km("usa").unwrap(), 14000.0);
        assert!(registry.market_distance_km("atlantis").unwrap_err().is_unknown_key());
    }

    #[test]
    fn certifications_expose_labels_only() {
        let registry = FactorRegistry::builtin();
        assert_eq!(registry.certification_label("gots"), Some("GOTS"));
        assert_eq!(registry.certification_label("iso_9001"), None);
        assert!(!registry.certifications().is_empty());
    }

    #[test]
    fn builtin_returns_the_same_instance() {
        let a = FactorRegistry::builtin() as *const FactorRegistry;
        let b = FactorRegistry::builtin() as *const FactorRegistry;
        assert_eq!(a, b);
    }
}
