//! # Short-Circuit Formulas
//!
//! Reactances derived from rated powers, and the symmetrical fault currents
//! that follow from a bus voltage and the impedance behind it.
//!
//! ## Notation
//!
//! - `U` = Line-to-line voltage of the bus (kV)
//! - `Sk` = Short-circuit power of the source (MVA)
//! - `S` = Rated power of a transformer (MVA)
//! - `uk` = Transformer short-circuit voltage (%)
//! - `I3` = Three-phase fault current (kA)
//! - `I2` = Two-phase (line-to-line) fault current (kA)
//!
//! kV over Ω gives kA, so currents here are in kiloamperes.
//!
//! ## References
//!
//! - IEC 60909-0: Short-circuit currents in three-phase a.c. systems

use crate::units::{Kilovolts, Megavoltamperes, Percent};

/// √3, the line-to-phase voltage factor
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Source reactance from its short-circuit power
///
/// # Formula
/// Xc = U² / Sk
///
/// `sk = 0` yields `+∞`; the result is passed through rather than rejected.
///
/// # Example
/// ```rust
/// use calc_core::equations::fault::source_reactance;
/// use calc_core::units::{Kilovolts, Megavoltamperes};
///
/// assert_eq!(source_reactance(Kilovolts(10.5), Megavoltamperes(200.0)), 0.55125);
/// ```
#[inline]
pub fn source_reactance(u: Kilovolts, sk: Megavoltamperes) -> f64 {
    u.squared() / sk.value()
}

/// Transformer reactance referred to voltage `u_kv`
///
/// # Formula
/// Xt = (uk / 100) · U² / S
///
/// # Example
/// ```rust
/// use calc_core::equations::fault::transformer_reactance;
/// use calc_core::units::{Kilovolts, Megavoltamperes, Percent};
///
/// let xt = transformer_reactance(Percent(10.5), Kilovolts(10.5), Megavoltamperes(6.3));
/// assert!((xt - 1.8375).abs() < 1e-12);
/// ```
#[inline]
pub fn transformer_reactance(uk: Percent, u: Kilovolts, rated: Megavoltamperes) -> f64 {
    uk.fraction() * (u.squared() / rated.value())
}

/// Initial symmetrical three-phase fault current
///
/// # Formula
/// I3 = U / (√3 · |Z|)
#[inline]
pub fn three_phase_fault_current(u: Kilovolts, impedance_ohm: f64) -> f64 {
    u.value() / (SQRT_3 * impedance_ohm)
}

/// Two-phase fault current from the three-phase current at the same bus
///
/// # Formula
/// I2 = I3 · √3 / 2
#[inline]
pub fn two_phase_fault_current(three_phase_ka: f64) -> f64 {
    three_phase_ka * two_phase_factor()
}

/// √3 / 2 ≈ 0.866
#[inline]
pub fn two_phase_factor() -> f64 {
    SQRT_3 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sqrt_3_constant() {
        assert!(approx_eq(SQRT_3, 3.0_f64.sqrt()));
    }

    #[test]
    fn test_two_phase_factor() {
        assert!(approx_eq(two_phase_factor(), 3.0_f64.sqrt() / 2.0));
        assert!(two_phase_factor() < 1.0);
    }

    #[test]
    fn test_source_reactance() {
        assert!(approx_eq(source_reactance(Kilovolts(10.5), Megavoltamperes(200.0)), 0.55125));
        assert!(approx_eq(source_reactance(Kilovolts(10.5), Megavoltamperes(1000.0)), 0.11025));
    }

    #[test]
    fn test_source_reactance_zero_power_is_infinite() {
        assert_eq!(source_reactance(Kilovolts(10.5), Megavoltamperes(0.0)), f64::INFINITY);
    }

    #[test]
    fn test_transformer_reactance_network() {
        // (11.1 · 115²) / (100 · 6.3)
        let xt = transformer_reactance(Percent(11.1), Kilovolts(115.0), Megavoltamperes(6.3));
        assert!((xt - 233.011_904_761_9).abs() < 1e-6);
    }

    #[test]
    fn test_three_phase_current() {
        // 10.5 / (√3 · 2.38875) = 2.5378 kA
        let i3 = three_phase_fault_current(Kilovolts(10.5), 2.38875);
        assert!((i3 - 2.537_803_381).abs() < 1e-6);
    }

    #[test]
    fn test_three_phase_current_infinite_impedance() {
        assert_eq!(three_phase_fault_current(Kilovolts(10.5), f64::INFINITY), 0.0);
    }

    #[test]
    fn test_two_phase_below_three_phase() {
        for i3 in [0.1, 1.0, 2.5378, 42.0] {
            assert!(two_phase_fault_current(i3) < i3);
        }
    }
}
