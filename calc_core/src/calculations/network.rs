//! # Power Network Short-Circuit Calculation
//!
//! Three-phase and two-phase fault currents at three cascaded points of a
//! substation, for the normal and the minimum operating mode of the system:
//!
//! ```text
//!   system ──Zs── 110 kV bus ──T── 10 kV bus ──line── point 10
//!                (115 kV)            (11 kV)
//! ```
//!
//! ## Pipeline (per mode)
//!
//! 1. `Xt = uk · U_hv² / (100 · S)`, shared by both modes
//! 2. `Z_hv = Rs + j(Xs + Xt)`
//! 3. 110 kV bus: `I3 = U_hv / (√3 · |Z_hv|)`, `I2 = I3 · √3/2`
//! 4. 10 kV bus: `Z_hv · (U_lv / U_hv)²`, currents at `U_lv`
//! 5. Point 10: `Z_hv + Z_line` (line added before referral), currents at `U_lv`
//!
//! All twelve currents are in kA with one decimal.
//!
//! ## Precision
//!
//! In [`PrecisionMode::Legacy`] (the default) the two-phase current is derived
//! from the already formatted three-phase value, as a hand calculation that
//! carries rounded intermediates would. [`PrecisionMode::Full`] derives it
//! from the unrounded value.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::network::calculate_network;
//!
//! let result = calculate_network(10.65, 24.02, 34.88, 65.68);
//! assert_eq!(result.lv_bus.three_phase, "2.7");
//! assert_eq!(result.lv_bus.two_phase, "2.3");
//! assert_eq!(result.lv_bus.three_phase_min, "2.3");
//! assert_eq!(result.lv_bus.two_phase_min, "2.0");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::fault::{three_phase_fault_current, transformer_reactance, two_phase_fault_current};
use crate::equations::impedance::{voltage_ratio_squared, Impedance};
use crate::format::{format_fixed, parse_formatted};
use crate::ratings::NetworkRatings;
use crate::units::Kilovolts;

/// How the two-phase current is derived from the three-phase one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrecisionMode {
    /// From the three-phase current after rounding to one decimal
    #[default]
    Legacy,
    /// From the unrounded three-phase current
    Full,
}

/// Source impedances for both operating modes, referred to the HV side.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rsn": 10.65,
///   "xsn": 24.02,
///   "rsn_min": 34.88,
///   "xsn_min": 65.68,
///   "precision": "Legacy"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInput {
    /// System resistance, normal mode (Ω)
    pub rsn: f64,
    /// System reactance, normal mode (Ω)
    pub xsn: f64,
    /// System resistance, minimum mode (Ω)
    pub rsn_min: f64,
    /// System reactance, minimum mode (Ω)
    pub xsn_min: f64,
    pub precision: PrecisionMode,
}

/// Fault currents at one point for both modes, kA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusCurrents {
    pub three_phase: String,
    pub two_phase: String,
    pub three_phase_min: String,
    pub two_phase_min: String,
}

/// Fault currents at all three points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResult {
    /// 110 kV bus
    pub hv_bus: BusCurrents,
    /// 10 kV bus
    pub lv_bus: BusCurrents,
    /// Downstream point at the end of the line
    pub point_10: BusCurrents,
}

impl NetworkResult {
    /// Points in feeding order with their display names
    pub fn points(&self) -> [(&'static str, &BusCurrents); 3] {
        [
            ("110 kV bus", &self.hv_bus),
            ("10 kV bus", &self.lv_bus),
            ("Point 10", &self.point_10),
        ]
    }
}

/// Run the calculation with explicit ratings.
pub fn calculate(input: &NetworkInput, ratings: &NetworkRatings) -> NetworkResult {
    let hv = ratings.hv_voltage_kv;
    let lv = ratings.lv_voltage_kv;

    let xt = transformer_reactance(
        ratings.transformer.impedance_voltage_pct,
        hv,
        ratings.transformer.rated_power_mva,
    );

    let normal = Impedance::new(input.rsn, input.xsn).with_added_reactance(xt);
    let minimum = Impedance::new(input.rsn_min, input.xsn_min).with_added_reactance(xt);
    debug!(xt, ?normal, ?minimum, "network impedances at HV bus");

    let k2 = voltage_ratio_squared(hv, lv);
    let mode = input.precision;

    NetworkResult {
        hv_bus: bus_currents(hv, normal, minimum, mode),
        lv_bus: bus_currents(lv, normal.transformed(k2), minimum.transformed(k2), mode),
        point_10: bus_currents(lv, normal + ratings.line, minimum + ratings.line, mode),
    }
}

/// Run the calculation with the default ratings in legacy precision.
pub fn calculate_network(rsn: f64, xsn: f64, rsn_min: f64, xsn_min: f64) -> NetworkResult {
    let input = NetworkInput {
        rsn,
        xsn,
        rsn_min,
        xsn_min,
        precision: PrecisionMode::Legacy,
    };
    calculate(&input, &NetworkRatings::default())
}

fn bus_currents(u: Kilovolts, normal: Impedance, minimum: Impedance, mode: PrecisionMode) -> BusCurrents {
    let (three_phase, two_phase) = fault_currents(u, normal, mode);
    let (three_phase_min, two_phase_min) = fault_currents(u, minimum, mode);
    BusCurrents {
        three_phase,
        two_phase,
        three_phase_min,
        two_phase_min,
    }
}

fn fault_currents(u: Kilovolts, z: Impedance, mode: PrecisionMode) -> (String, String) {
    let i3 = three_phase_fault_current(u, z.magnitude());
    let three_phase = format_fixed(i3, 1);
    let i2 = match mode {
        PrecisionMode::Legacy => two_phase_fault_current(parse_formatted(&three_phase)),
        PrecisionMode::Full => two_phase_fault_current(i3),
    };
    (three_phase, format_fixed(i2, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::fault::SQRT_3;
    use crate::units::{Megavoltamperes, Percent};

    fn golden_input(precision: PrecisionMode) -> NetworkInput {
        NetworkInput {
            rsn: 10.65,
            xsn: 24.02,
            rsn_min: 34.88,
            xsn_min: 65.68,
            precision,
        }
    }

    fn currents(values: [&str; 4]) -> BusCurrents {
        BusCurrents {
            three_phase: values[0].to_string(),
            two_phase: values[1].to_string(),
            three_phase_min: values[2].to_string(),
            two_phase_min: values[3].to_string(),
        }
    }

    #[test]
    fn test_golden_legacy() {
        let r = calculate_network(10.65, 24.02, 34.88, 65.68);
        assert_eq!(r.hv_bus, currents(["0.3", "0.3", "0.2", "0.2"]));
        assert_eq!(r.lv_bus, currents(["2.7", "2.3", "2.3", "2.0"]));
        assert_eq!(r.point_10, currents(["0.0", "0.0", "0.0", "0.0"]));
    }

    #[test]
    fn test_golden_full_precision() {
        let r = calculate(&golden_input(PrecisionMode::Full), &NetworkRatings::default());
        // 0.258 kA · 0.866 = 0.224, where legacy uses 0.3 · 0.866 = 0.260
        assert_eq!(r.hv_bus, currents(["0.3", "0.2", "0.2", "0.2"]));
        assert_eq!(r.lv_bus, currents(["2.7", "2.3", "2.3", "2.0"]));
        assert_eq!(r.point_10, currents(["0.0", "0.0", "0.0", "0.0"]));
    }

    #[test]
    fn test_zero_source_impedance() {
        // only the transformer remains: |Z| = 233.01 Ω
        let r = calculate_network(0.0, 0.0, 0.0, 0.0);
        assert_eq!(r.hv_bus, currents(["0.3", "0.3", "0.3", "0.3"]));
        assert_eq!(r.lv_bus, currents(["3.0", "2.6", "3.0", "2.6"]));
        assert_eq!(r.point_10, currents(["0.0", "0.0", "0.0", "0.0"]));
    }

    #[test]
    fn test_two_phase_never_exceeds_three_phase() {
        let grid = [0.0, 0.5, 5.0, 24.02, 65.68, 300.0];
        for mode in [PrecisionMode::Legacy, PrecisionMode::Full] {
            for &r in &grid {
                for &x in &grid {
                    let input = NetworkInput {
                        rsn: r,
                        xsn: x,
                        rsn_min: r * 2.0,
                        xsn_min: x * 2.0,
                        precision: mode,
                    };
                    let result = calculate(&input, &NetworkRatings::default());
                    for (name, bus) in result.points() {
                        let pairs = [
                            (&bus.three_phase, &bus.two_phase),
                            (&bus.three_phase_min, &bus.two_phase_min),
                        ];
                        for (i3, i2) in pairs {
                            let i3: f64 = i3.parse().unwrap();
                            let i2: f64 = i2.parse().unwrap();
                            assert!(i2 <= i3, "{} r={} x={}: I2 {} > I3 {}", name, r, x, i2, i3);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_line_added_before_referral() {
        // A short line and a stiff, low-voltage system make point 10 readable
        let ratings = NetworkRatings {
            hv_voltage_kv: Kilovolts(11.0),
            line: Impedance::new(0.3, 0.4),
            ..NetworkRatings::default()
        };
        let input = NetworkInput {
            precision: PrecisionMode::Full,
            ..NetworkInput::default()
        };
        let r = calculate(&input, &ratings);

        let xt = transformer_reactance(Percent(11.1), Kilovolts(11.0), Megavoltamperes(6.3));
        let z = Impedance::new(0.3, xt + 0.4);
        let expected = 11.0 / (SQRT_3 * z.magnitude());
        assert_eq!(r.point_10.three_phase, format_fixed(expected, 1));
    }

    #[test]
    fn test_modes_are_independent() {
        let a = calculate_network(10.65, 24.02, 34.88, 65.68);
        let b = calculate_network(10.65, 24.02, 1.0, 1.0);
        assert_eq!(a.hv_bus.three_phase, b.hv_bus.three_phase);
        assert_eq!(a.lv_bus.three_phase, b.lv_bus.three_phase);
        assert_eq!(a.lv_bus.two_phase, b.lv_bus.two_phase);
        assert_ne!(a.lv_bus.three_phase_min, b.lv_bus.three_phase_min);
    }

    #[test]
    fn test_minimum_mode_gives_lower_current() {
        let r = calculate(&golden_input(PrecisionMode::Full), &NetworkRatings::default());
        let normal: f64 = r.lv_bus.three_phase.parse().unwrap();
        let minimum: f64 = r.lv_bus.three_phase_min.parse().unwrap();
        assert!(minimum < normal);
    }

    #[test]
    fn test_precision_defaults_to_legacy() {
        let input: NetworkInput = serde_json::from_str(r#"{ "rsn": 10.65, "xsn": 24.02 }"#).unwrap();
        assert_eq!(input.precision, PrecisionMode::Legacy);
        assert_eq!(input.rsn_min, 0.0);
    }
}
