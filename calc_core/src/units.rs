//! # Unit Types
//!
//! Type-safe wrappers for the units that appear in equipment ratings. They
//! keep a voltage from being passed where a power is expected while staying
//! plain numbers on the wire (`#[serde(transparent)]`).
//!
//! ## Units
//!
//! The engine works in the units the formulas are written in:
//! - Voltage: kilovolts (kV)
//! - Apparent power: megavolt-amperes (MVA)
//! - Short-circuit voltage of a transformer: percent of rated voltage (%)
//!
//! Currents come out in kA when kV and Ω are combined, and in A for the
//! cable calculator, which takes kVA and reports per-cable amperes.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Kilovolts, Percent};
//!
//! let hv = Kilovolts(115.0);
//! assert_eq!(hv.squared(), 13225.0);
//!
//! let uk = Percent(10.5);
//! assert_eq!(uk.fraction(), 0.105);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Electrical Units
// ============================================================================

/// Voltage in kilovolts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilovolts(pub f64);

impl Kilovolts {
    /// U², the factor every impedance-from-power formula starts from
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

/// Apparent power in megavolt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megavoltamperes(pub f64);

/// Percentage (e.g. transformer short-circuit voltage uk%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// The percentage as a fraction (10.5 % -> 0.105)
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

macro_rules! impl_raw_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_raw_value!(Kilovolts, Megavoltamperes, Percent);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_fraction() {
        assert!((Percent(11.1).fraction() - 0.111).abs() < 1e-12);
    }

    #[test]
    fn test_kilovolts_squared() {
        assert_eq!(Kilovolts(10.5).squared(), 110.25);
        // same bits as powi, so formulas keep their golden values
        assert_eq!(Kilovolts(115.0).squared(), 115.0_f64.powi(2));
    }

    #[test]
    fn test_value() {
        assert_eq!(Megavoltamperes(6.3).value(), 6.3);
        assert_eq!(Percent(10.5).value(), 10.5);
    }

    #[test]
    fn test_serialization() {
        let s = Megavoltamperes(6.3);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "6.3");

        let roundtrip: Megavoltamperes = serde_json::from_str(&json).unwrap();
        assert_eq!(s, roundtrip);
    }
}
