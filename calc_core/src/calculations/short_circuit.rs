//! # Short-Circuit Calculation (Single Bus)
//!
//! Initial symmetrical three-phase fault current at a 10 kV bus fed from a
//! source of known short-circuit power through one unit transformer.
//!
//! ## Assumptions
//!
//! - Purely reactive source and transformer (resistance neglected)
//! - Average bus voltage 10.5 kV
//! - Transformer uk = 10.5 %, S = 6.3 MVA
//!
//! ## Zero fault power
//!
//! `sk = 0` is not rejected. The source reactance becomes `+∞`, so does the
//! total, and the current collapses to zero:
//!
//! ```rust
//! use calc_core::calculations::short_circuit::calculate_short_circuit;
//!
//! let result = calculate_short_circuit(0.0);
//! assert_eq!(result.reactor_impedance, "Infinity");
//! assert_eq!(result.transformer_impedance, "1.84");
//! assert_eq!(result.total_impedance, "Infinity");
//! assert_eq!(result.initial_short_circuit_current, "0.0");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::fault::{source_reactance, three_phase_fault_current, transformer_reactance};
use crate::format::format_fixed;
use crate::ratings::ShortCircuitRatings;
use crate::units::Megavoltamperes;

/// Input parameters for the single-bus short-circuit calculation.
///
/// ## JSON Example
///
/// ```json
/// { "sk": 200.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortCircuitInput {
    /// Short-circuit power of the source in MVA (Sk)
    pub sk: f64,
}

/// Short-circuit results, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortCircuitResult {
    /// Source reactance Xc, Ω (2 decimals)
    pub reactor_impedance: String,
    /// Transformer reactance Xt, Ω (2 decimals)
    pub transformer_impedance: String,
    /// Xc + Xt, Ω (2 decimals)
    pub total_impedance: String,
    /// Initial three-phase fault current, kA (1 decimal)
    pub initial_short_circuit_current: String,
}

/// Run the calculation with explicit ratings.
pub fn calculate(input: &ShortCircuitInput, ratings: &ShortCircuitRatings) -> ShortCircuitResult {
    let u = ratings.base_voltage_kv;

    let xc = source_reactance(u, Megavoltamperes(input.sk));
    let xt = transformer_reactance(
        ratings.transformer.impedance_voltage_pct,
        u,
        ratings.transformer.rated_power_mva,
    );
    let total = xc + xt;
    let current = three_phase_fault_current(u, total);

    debug!(sk = input.sk, xc, xt, total, current, "short-circuit");
    if !xc.is_finite() {
        warn!(sk = input.sk, "source reactance is not finite, fault current collapses");
    }

    ShortCircuitResult {
        reactor_impedance: format_fixed(xc, 2),
        transformer_impedance: format_fixed(xt, 2),
        total_impedance: format_fixed(total, 2),
        initial_short_circuit_current: format_fixed(current, 1),
    }
}

/// Run the calculation with the default ratings.
pub fn calculate_short_circuit(sk: f64) -> ShortCircuitResult {
    calculate(&ShortCircuitInput { sk }, &ShortCircuitRatings::default())
}
