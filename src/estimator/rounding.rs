//! Display rounding utilities.
//!
//! Internal aggregation keeps full precision; reported values are rounded
//! to two decimal places exactly once, at the display boundary. Batch
//! totals are always derived from unrounded per-unit values first.

/// Decimal places used for reported CO2e values.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(1.636), 1.64);
        assert_eq!(round2(224.0), 224.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 is exactly representable, so the tie is a true tie.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
