//! # Cable Sizing Formulas
//!
//! Load current of a cable group and the two cross-section criteria a
//! medium-voltage cable must satisfy.
//!
//! ## Notation
//!
//! - `Sm` = Apparent power carried by the cable group (kVA over kV gives A)
//! - `U` = Nominal voltage (kV)
//! - `n` = Number of parallel cables sharing the load
//! - `Im` = Normal-mode current per cable (A)
//! - `Im.pa` = Post-emergency current with one cable out of service (A)
//! - `j_ek` = Economic current density (A/mm²)
//! - `Ik` = Short-circuit current (A)
//! - `tf` = Fault clearing time (s)
//! - `Ct` = Thermal coefficient of the conductor/insulation pair (A·√s/mm²)
//!
//! ## References
//!
//! - PUE Table 1.3.36: Economic current density
//! - IEC 60949: Thermally permissible short-circuit currents

use super::fault::SQRT_3;
use crate::units::Kilovolts;

/// Normal-mode current per cable
///
/// # Formula
/// Im = (Sm / n) / (√3 · U)
///
/// # Example
/// ```rust
/// use calc_core::equations::cable::normal_mode_current;
/// use calc_core::units::Kilovolts;
///
/// let im = normal_mode_current(1300.0, 2, Kilovolts(10.0));
/// assert!((im - 37.5278).abs() < 1e-4);
/// ```
#[inline]
pub fn normal_mode_current(sm: f64, parallel_cables: u32, u: Kilovolts) -> f64 {
    (sm / f64::from(parallel_cables)) / (SQRT_3 * u.value())
}

/// Post-emergency current: the remaining cable carries the whole group load
///
/// # Formula
/// Im.pa = n · Im
#[inline]
pub fn post_emergency_current(normal_current: f64, parallel_cables: u32) -> f64 {
    f64::from(parallel_cables) * normal_current
}

/// Cross-section chosen by economic current density
///
/// # Formula
/// s_ek = Im / j_ek
#[inline]
pub fn economic_cross_section(normal_current: f64, economic_current_density: f64) -> f64 {
    normal_current / economic_current_density
}

/// Minimum cross-section that survives short-circuit heating
///
/// # Formula
/// s_min = Ik · √tf / Ct
///
/// # Example
/// ```rust
/// use calc_core::equations::cable::thermal_minimum_cross_section;
///
/// let s = thermal_minimum_cross_section(2500.0, 2.5, 92.0);
/// assert!((s - 42.9657).abs() < 1e-4);
/// ```
#[inline]
pub fn thermal_minimum_cross_section(ik: f64, tf: f64, thermal_coefficient: f64) -> f64 {
    (ik * tf.sqrt()) / thermal_coefficient
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_normal_mode_current_matches_two_cable_form() {
        // (sm / 2) / (√3 · 10)
        let sm = 1300.0;
        let expected = (sm / 2.0) / (3.0_f64.sqrt() * 10.0);
        assert!(approx_eq(normal_mode_current(sm, 2, Kilovolts(10.0)), expected));
    }

    #[test]
    fn test_post_emergency_is_n_times_normal() {
        assert!(approx_eq(post_emergency_current(37.5, 2), 75.0));
        assert!(approx_eq(post_emergency_current(10.0, 3), 30.0));
    }

    #[test]
    fn test_economic_cross_section() {
        assert!(approx_eq(economic_cross_section(14.0, 1.4), 10.0));
    }

    #[test]
    fn test_thermal_cross_section_zero_time() {
        assert_eq!(thermal_minimum_cross_section(2500.0, 0.0, 92.0), 0.0);
    }

    #[test]
    fn test_thermal_cross_section_negative_time_is_nan() {
        // √ of a negative clearing time has no meaning; NaN is passed through
        assert!(thermal_minimum_cross_section(2500.0, -1.0, 92.0).is_nan());
    }
}
