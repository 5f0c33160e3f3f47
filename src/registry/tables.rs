//! Authoring tables for the built-in emission factor registry.
//!
//! Row order is user-facing: pickers display entries exactly as declared
//! here. Changing a factor means redeploying these constants, never a
//! runtime mutation.

/// (key, label, kg CO2e per kg of fiber)
pub(super) const MATERIALS: &[(&str, &str, f64)] = &[
    ("cotton", "Cotton", 8.0),
    ("organic_cotton", "Organic Cotton", 5.2),
    ("polyester", "Polyester", 9.5),
    ("recycled_polyester", "Recycled Polyester", 4.2),
    ("nylon", "Nylon", 13.0),
    ("acrylic", "Acrylic", 11.5),
    ("wool", "Wool", 22.1),
    ("linen", "Linen", 5.4),
    ("hemp", "Hemp", 4.1),
    ("viscose", "Viscose", 6.3),
    ("lyocell", "Lyocell", 5.0),
    ("silk", "Silk", 25.0),
    ("elastane", "Elastane", 15.8),
    ("leather", "Leather", 17.0),
];

/// (key, label, kg CO2e per garment) — flat per-process overhead, not
/// mass-scaled.
pub(super) const PRODUCTION_PROCESSES: &[(&str, &str, f64)] = &[
    ("spinning", "Spinning", 0.6),
    ("weaving", "Weaving", 0.7),
    ("knitting", "Knitting", 0.5),
    ("dyeing", "Dyeing", 1.2),
    ("printing", "Printing", 0.9),
    ("cutting_sewing", "Cutting & Sewing", 0.8),
    ("washing", "Washing", 0.4),
    ("finishing", "Finishing", 0.6),
    ("embroidery", "Embroidery", 0.3),
];

/// (key, label, kg CO2e per kWh)
pub(super) const ENERGY_SOURCES: &[(&str, &str, f64)] = &[
    ("grid", "Grid Electricity", 0.62),
    ("natural_gas", "Natural Gas", 0.45),
    ("coal", "Coal", 0.95),
    ("diesel_generator", "Diesel Generator", 0.85),
    ("solar", "Solar", 0.05),
    ("wind", "Wind", 0.01),
    ("hydro", "Hydro", 0.02),
    ("biomass", "Biomass", 0.23),
];

/// (key, label, kg CO2e per km)
pub(super) const TRANSPORT_MODES: &[(&str, &str, f64)] = &[
    ("road", "Road Freight", 0.105),
    ("sea", "Sea Freight", 0.016),
    ("air", "Air Freight", 0.602),
    ("rail", "Rail Freight", 0.028),
];

/// (key, label, canonical shipping distance in km) — the proxy distance
/// used when a transport leg omits its own.
pub(super) const DESTINATION_MARKETS: &[(&str, &str, f64)] = &[
    ("usa", "United States", 14000.0),
    ("canada", "Canada", 13200.0),
    ("uk", "United Kingdom", 8700.0),
    ("germany", "Germany", 8200.0),
    ("france", "France", 8400.0),
    ("netherlands", "Netherlands", 8300.0),
    ("italy", "Italy", 7600.0),
    ("spain", "Spain", 9100.0),
    ("japan", "Japan", 5800.0),
    ("south_korea", "South Korea", 5200.0),
    ("australia", "Australia", 8300.0),
    ("uae", "United Arab Emirates", 4100.0),
];

/// (key, label) — certifications carry no numeric factor.
pub(super) const CERTIFICATIONS: &[(&str, &str)] = &[
    ("gots", "GOTS"),
    ("oeko_tex", "OEKO-TEX Standard 100"),
    ("grs", "Global Recycled Standard"),
    ("bci", "Better Cotton Initiative"),
    ("fair_trade", "Fairtrade Textile Standard"),
    ("bluesign", "bluesign"),
    ("cradle_to_cradle", "Cradle to Cradle Certified"),
];
