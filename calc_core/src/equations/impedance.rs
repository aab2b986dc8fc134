//! # Impedance Model
//!
//! Series impedances as (resistance, reactance) pairs, their magnitude, and
//! referral across a transformer by the square of its voltage ratio.
//!
//! ## Notation
//!
//! - `R` = Resistance (Ω)
//! - `X` = Reactance (Ω)
//! - `|Z|` = Impedance magnitude (Ω)
//! - `k²` = Squared voltage ratio `(U_to / U_from)²`
//!
//! ## References
//!
//! - IEC 60909-0: Short-circuit currents in three-phase a.c. systems

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::units::Kilovolts;

/// A series impedance `Z = R + jX`, backed by a [`Complex64`].
///
/// Values are never mutated; referral and composition return new impedances.
/// Components are not required to be non-negative. On the wire the
/// components are named rather than a `[re, im]` pair.
///
/// ## JSON Example
///
/// ```json
/// { "resistance": 12.52, "reactance": 6.88 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ImpedanceParts", into = "ImpedanceParts")]
pub struct Impedance(Complex64);

#[derive(Serialize, Deserialize)]
struct ImpedanceParts {
    resistance: f64,
    reactance: f64,
}

impl From<ImpedanceParts> for Impedance {
    fn from(parts: ImpedanceParts) -> Self {
        Impedance::new(parts.resistance, parts.reactance)
    }
}

impl From<Impedance> for ImpedanceParts {
    fn from(z: Impedance) -> Self {
        ImpedanceParts {
            resistance: z.resistance(),
            reactance: z.reactance(),
        }
    }
}

impl From<Complex64> for Impedance {
    fn from(z: Complex64) -> Self {
        Impedance(z)
    }
}

impl From<Impedance> for Complex64 {
    fn from(z: Impedance) -> Self {
        z.0
    }
}

impl Impedance {
    pub const fn new(resistance: f64, reactance: f64) -> Self {
        Self(Complex64::new(resistance, reactance))
    }

    /// Resistance R in ohms
    #[inline]
    pub fn resistance(&self) -> f64 {
        self.0.re
    }

    /// Reactance X in ohms
    #[inline]
    pub fn reactance(&self) -> f64 {
        self.0.im
    }

    /// Magnitude |Z| = √(R² + X²)
    ///
    /// # Example
    /// ```rust
    /// use calc_core::equations::impedance::Impedance;
    ///
    /// let z = Impedance::new(3.0, 4.0);
    /// assert_eq!(z.magnitude(), 5.0);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Refer this impedance to the other side of a transformer.
    ///
    /// # Formula
    /// R' = R·k², X' = X·k²
    ///
    /// # Example
    /// ```rust
    /// use calc_core::equations::impedance::{voltage_ratio_squared, Impedance};
    /// use calc_core::units::Kilovolts;
    ///
    /// let hv_side = Impedance::new(115.0, 230.0);
    /// let lv_side = hv_side.transformed(voltage_ratio_squared(Kilovolts(115.0), Kilovolts(11.0)));
    /// assert!((lv_side.resistance() - 1.0521739).abs() < 1e-6);
    /// // the source impedance is unchanged
    /// assert_eq!(hv_side.resistance(), 115.0);
    /// ```
    #[inline]
    pub fn transformed(&self, ratio_squared: f64) -> Impedance {
        Impedance(self.0 * ratio_squared)
    }

    /// Series composition: Z = Z₁ + Z₂
    #[inline]
    pub fn add_series(&self, other: Impedance) -> Impedance {
        Impedance(self.0 + other.0)
    }

    /// Add a pure reactance in series, leaving the resistance unchanged
    #[inline]
    pub fn with_added_reactance(&self, reactance: f64) -> Impedance {
        self.add_series(Impedance::new(0.0, reactance))
    }
}

impl Add for Impedance {
    type Output = Impedance;

    fn add(self, rhs: Impedance) -> Impedance {
        self.add_series(rhs)
    }
}

/// Squared voltage ratio for referring an impedance from `from_kv` to `to_kv`
///
/// # Formula
/// k² = (U_to / U_from)²
///
/// # Example
/// ```rust
/// use calc_core::equations::impedance::voltage_ratio_squared;
/// use calc_core::units::Kilovolts;
///
/// let k2 = voltage_ratio_squared(Kilovolts(115.0), Kilovolts(11.0));
/// assert!((k2 - 121.0 / 13225.0).abs() < 1e-15);
/// ```
#[inline]
pub fn voltage_ratio_squared(from: Kilovolts, to: Kilovolts) -> f64 {
    to.squared() / from.squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_magnitude() {
        assert!(approx_eq(Impedance::new(3.0, 4.0).magnitude(), 5.0));
        assert!(approx_eq(Impedance::new(0.0, 2.5).magnitude(), 2.5));
        assert!(approx_eq(Impedance::new(-3.0, 4.0).magnitude(), 5.0));
        assert_eq!(Impedance::default().magnitude(), 0.0);
    }

    #[test]
    fn test_transformed_scales_both_components() {
        let z = Impedance::new(10.65, 257.03);
        let k2 = voltage_ratio_squared(Kilovolts(115.0), Kilovolts(11.0));
        let t = z.transformed(k2);
        assert!(approx_eq(t.resistance(), 10.65 * k2));
        assert!(approx_eq(t.reactance(), 257.03 * k2));
        // |Z'| = |Z|·k²
        assert!(approx_eq(t.magnitude(), z.magnitude() * k2));
    }

    #[test]
    fn test_transformed_does_not_mutate() {
        let z = Impedance::new(1.0, 2.0);
        let _ = z.transformed(4.0);
        assert_eq!(z, Impedance::new(1.0, 2.0));
    }

    #[test]
    fn test_add_series() {
        let source = Impedance::new(10.65, 24.02);
        let line = Impedance::new(12.52, 6.88);
        let total = source.add_series(line);
        assert!(approx_eq(total.resistance(), 23.17));
        assert!(approx_eq(total.reactance(), 30.9));
        assert_eq!(total, source + line);
    }

    #[test]
    fn test_with_added_reactance() {
        let z = Impedance::new(10.65, 24.02).with_added_reactance(100.0);
        assert_eq!(z.resistance(), 10.65);
        assert!(approx_eq(z.reactance(), 124.02));
    }

    #[test]
    fn test_voltage_ratio_identity() {
        assert_eq!(voltage_ratio_squared(Kilovolts(11.0), Kilovolts(11.0)), 1.0);
    }

    #[test]
    fn test_serialization() {
        let z = Impedance::new(12.52, 6.88);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, r#"{"resistance":12.52,"reactance":6.88}"#);
        let back: Impedance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, z);
    }

    #[test]
    fn test_complex_conversions() {
        let z: Impedance = Complex64::new(3.0, -4.0).into();
        assert_eq!(z, Impedance::new(3.0, -4.0));
        let c: Complex64 = (z + Impedance::new(1.0, 1.0)).into();
        assert_eq!(c, Complex64::new(4.0, -3.0));
        assert!(approx_eq(c.norm(), 5.0));
    }
}
