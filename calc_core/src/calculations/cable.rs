//! # Cable Sizing Calculation
//!
//! Sizes a group of parallel medium-voltage cables feeding one load.
//!
//! ## Assumptions
//!
//! - The load is shared equally by `parallel_cables` cables (two by default)
//! - Post-emergency: one cable out, the remaining one carries the whole load
//! - Economic section from a fixed current density (1.4 A/mm²)
//! - Thermal section from a fixed conductor coefficient (92 A·√s/mm²)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::cable::calculate_cable;
//!
//! let result = calculate_cable(1300.0, 2500.0, 2.5);
//! assert_eq!(result.normal_current, "37.5");
//! assert_eq!(result.post_emergency_current, "75");
//! assert_eq!(result.economic_cross_section, "26.8");
//! assert_eq!(result.minimum_cross_section, "43");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::cable::{
    economic_cross_section, normal_mode_current, post_emergency_current,
    thermal_minimum_cross_section,
};
use crate::format::format_fixed;
use crate::ratings::CableRatings;

/// Input parameters for cable sizing.
///
/// ## JSON Example
///
/// ```json
/// { "sm": 1300.0, "ik": 2500.0, "tf": 2.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CableInput {
    /// Apparent power of the cable group (Sm)
    pub sm: f64,
    /// Short-circuit current in A (Ik)
    pub ik: f64,
    /// Fault clearing time in seconds (tf)
    pub tf: f64,
}

/// Cable sizing results, formatted for display.
///
/// ## JSON Example
///
/// ```json
/// {
///   "normal_current": "37.5",
///   "post_emergency_current": "75",
///   "economic_cross_section": "26.8",
///   "minimum_cross_section": "43"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CableResult {
    /// Normal-mode current per cable, A (1 decimal)
    pub normal_current: String,
    /// Post-emergency current, A (0 decimals)
    pub post_emergency_current: String,
    /// Economic cross-section, mm² (1 decimal)
    pub economic_cross_section: String,
    /// Thermal minimum cross-section, mm² (0 decimals)
    pub minimum_cross_section: String,
}

/// Size a cable group with explicit ratings.
pub fn calculate(input: &CableInput, ratings: &CableRatings) -> CableResult {
    let im = normal_mode_current(
        input.sm,
        ratings.parallel_cables,
        ratings.nominal_voltage_kv,
    );
    let im_pa = post_emergency_current(im, ratings.parallel_cables);
    let s_ek = economic_cross_section(im, ratings.economic_current_density);
    let s_min = thermal_minimum_cross_section(input.ik, input.tf, ratings.thermal_coefficient);

    debug!(sm = input.sm, ik = input.ik, tf = input.tf, im, im_pa, s_ek, s_min, "cable sizing");

    CableResult {
        normal_current: format_fixed(im, 1),
        post_emergency_current: format_fixed(im_pa, 0),
        economic_cross_section: format_fixed(s_ek, 1),
        minimum_cross_section: format_fixed(s_min, 0),
    }
}

/// Size a cable group with the default ratings.
pub fn calculate_cable(sm: f64, ik: f64, tf: f64) -> CableResult {
    calculate(&CableInput { sm, ik, tf }, &CableRatings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_formatted;

    #[test]
    fn test_reference_case() {
        let r = calculate_cable(1300.0, 2500.0, 2.5);
        assert_eq!(r.normal_current, "37.5");
        assert_eq!(r.post_emergency_current, "75");
        assert_eq!(r.economic_cross_section, "26.8");
        // 42.97 rounds up
        assert_eq!(r.minimum_cross_section, "43");
    }

    #[test]
    fn test_all_zero_inputs() {
        let r = calculate_cable(0.0, 0.0, 0.0);
        assert_eq!(r.normal_current, "0.0");
        assert_eq!(r.post_emergency_current, "0");
        assert_eq!(r.economic_cross_section, "0.0");
        assert_eq!(r.minimum_cross_section, "0");
    }

    #[test]
    fn test_second_case() {
        let r = calculate_cable(500.0, 10000.0, 1.0);
        assert_eq!(r.normal_current, "14.4");
        assert_eq!(r.post_emergency_current, "29");
        assert_eq!(r.economic_cross_section, "10.3");
        assert_eq!(r.minimum_cross_section, "109");
    }

    #[test]
    fn test_post_emergency_is_twice_normal() {
        for sm in [0.0, 10.0, 250.0, 1300.0, 4800.0, 12345.6] {
            let r = calculate_cable(sm, 0.0, 0.0);
            let normal = parse_formatted(&r.normal_current);
            let emergency = parse_formatted(&r.post_emergency_current);
            // one-decimal value doubled vs. an integer: within 0.5 + 2·0.05
            assert!(
                (2.0 * normal - emergency).abs() <= 0.6,
                "sm = {}: 2·{} vs {}",
                sm,
                normal,
                emergency
            );
        }
    }

    #[test]
    fn test_negative_clearing_time_formats_nan() {
        let r = calculate_cable(1300.0, 2500.0, -1.0);
        assert_eq!(r.minimum_cross_section, "NaN");
        assert_eq!(r.normal_current, "37.5");
    }

    #[test]
    fn test_custom_ratings() {
        let ratings = CableRatings {
            parallel_cables: 1,
            ..CableRatings::default()
        };
        let r = calculate(&CableInput { sm: 1300.0, ik: 0.0, tf: 0.0 }, &ratings);
        // one cable: full load, post-emergency equals normal
        assert_eq!(r.normal_current, "75.1");
        assert_eq!(r.post_emergency_current, "75");
    }

    #[test]
    fn test_input_deserializes_with_missing_fields() {
        let input: CableInput = serde_json::from_str(r#"{ "sm": 1300.0 }"#).unwrap();
        assert_eq!(input.sm, 1300.0);
        assert_eq!(input.ik, 0.0);
        assert_eq!(input.tf, 0.0);
    }
}
