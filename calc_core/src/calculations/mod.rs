//! # Power System Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, missing fields are `0.0`)
//! - `*Result` - Display-ready decimal strings (JSON-serializable)
//! - `calculate(input, ratings) -> *Result` - Pure calculation function
//! - `calculate_*(...)` - Same, with the default equipment ratings
//!
//! No calculation fails. Inputs are taken as given, and singular formulas
//! render as the sentinels described in [`crate::format`].
//!
//! ## Available Calculations
//!
//! - [`cable`] - Parallel cable group sizing
//! - [`short_circuit`] - Fault current at a single 10 kV bus
//! - [`network`] - Fault currents at three cascaded points, two operating modes
//!
//! ## JSON requests
//!
//! ```rust
//! use calc_core::calculations::{CalculationOutput, CalculationRequest};
//! use calc_core::ratings::EquipmentRatings;
//!
//! let request = CalculationRequest::from_json(r#"{ "type": "ShortCircuit", "sk": 200.0 }"#).unwrap();
//! match request.evaluate(&EquipmentRatings::default()) {
//!     CalculationOutput::ShortCircuit(result) => assert_eq!(result.total_impedance, "2.39"),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! ```

pub mod cable;
pub mod network;
pub mod short_circuit;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{CalcError, CalcResult};
use crate::ratings::EquipmentRatings;

// Re-export commonly used types
pub use cable::{calculate_cable, CableInput, CableResult};
pub use network::{calculate_network, BusCurrents, NetworkInput, NetworkResult, PrecisionMode};
pub use short_circuit::{calculate_short_circuit, ShortCircuitInput, ShortCircuitResult};

/// One calculation request, tagged by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// Cable group sizing
    Cable(CableInput),
    /// Single-bus short-circuit
    ShortCircuit(ShortCircuitInput),
    /// Three-point network short-circuit
    Network(NetworkInput),
}

/// The result matching a [`CalculationRequest`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Cable(CableResult),
    ShortCircuit(ShortCircuitResult),
    Network(NetworkResult),
}

impl CalculationRequest {
    /// Parse a request from JSON
    pub fn from_json(text: &str) -> CalcResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| CalcError::serialization(format!("Invalid calculation request: {}", e)))
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Cable(_) => "Cable",
            CalculationRequest::ShortCircuit(_) => "ShortCircuit",
            CalculationRequest::Network(_) => "Network",
        }
    }

    /// Run the requested calculation
    pub fn evaluate(&self, ratings: &EquipmentRatings) -> CalculationOutput {
        info!(calc_type = self.calc_type(), "evaluating request");
        match self {
            CalculationRequest::Cable(input) => {
                CalculationOutput::Cable(cable::calculate(input, &ratings.cable))
            }
            CalculationRequest::ShortCircuit(input) => {
                CalculationOutput::ShortCircuit(short_circuit::calculate(input, &ratings.short_circuit))
            }
            CalculationRequest::Network(input) => {
                CalculationOutput::Network(network::calculate(input, &ratings.network))
            }
        }
    }
}

impl CalculationOutput {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationOutput::Cable(_) => "Cable",
            CalculationOutput::ShortCircuit(_) => "ShortCircuit",
            CalculationOutput::Network(_) => "Network",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_cable() {
        let request =
            CalculationRequest::from_json(r#"{ "type": "Cable", "sm": 1300.0, "ik": 2500.0, "tf": 2.5 }"#)
                .unwrap();
        assert_eq!(request.calc_type(), "Cable");
        let output = request.evaluate(&EquipmentRatings::default());
        assert_eq!(output, CalculationOutput::Cable(calculate_cable(1300.0, 2500.0, 2.5)));
    }

    #[test]
    fn test_request_json_network_full_precision() {
        let request = CalculationRequest::from_json(
            r#"{ "type": "Network", "rsn": 10.65, "xsn": 24.02, "rsn_min": 34.88, "xsn_min": 65.68, "precision": "Full" }"#,
        )
        .unwrap();
        match request.evaluate(&EquipmentRatings::default()) {
            CalculationOutput::Network(result) => assert_eq!(result.hv_bus.two_phase, "0.2"),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_output_tagged_json() {
        let output = CalculationRequest::ShortCircuit(ShortCircuitInput { sk: 200.0 })
            .evaluate(&EquipmentRatings::default());
        assert_eq!(output.calc_type(), "ShortCircuit");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "ShortCircuit");
        assert_eq!(json["initial_short_circuit_current"], "2.5");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = CalculationRequest::from_json(r#"{ "type": "Transformer", "rated_power_mva": 6.3 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_request_uses_supplied_ratings() {
        let mut ratings = EquipmentRatings::default();
        ratings.cable.parallel_cables = 1;
        let output = CalculationRequest::Cable(CableInput { sm: 1300.0, ik: 0.0, tf: 0.0 }).evaluate(&ratings);
        match output {
            CalculationOutput::Cable(result) => assert_eq!(result.normal_current, "75.1"),
            other => panic!("unexpected output: {:?}", other),
        }
    }
}
