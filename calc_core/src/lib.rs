//! # calc_core - Power System Calculation Engine
//!
//! `calc_core` is the computational heart of Faultline: cable sizing and
//! short-circuit currents for a medium-voltage substation, evaluated from a
//! handful of scalar inputs. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Display-ready**: Results are decimal strings with fixed precision
//! - **Never fails**: Bad input is `0.0`, singular formulas format as sentinels
//! - **Configurable**: Every engineering constant is a named equipment rating
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{calculate_cable, calculate_network, calculate_short_circuit};
//!
//! let cable = calculate_cable(1300.0, 2500.0, 2.5);
//! assert_eq!(cable.normal_current, "37.5");
//!
//! let sc = calculate_short_circuit(200.0);
//! assert_eq!(sc.initial_short_circuit_current, "2.5");
//!
//! let network = calculate_network(10.65, 24.02, 34.88, 65.68);
//! assert_eq!(network.lv_bus.three_phase, "2.7");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The three calculators and the JSON request envelope
//! - [`equations`] - Formulas, impedance model, and the equation registry
//! - [`format`] - Fixed-decimal formatting and input parsing
//! - [`ratings`] - Equipment ratings (configuration)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Ratings and request files

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod format;
pub mod ratings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate_cable, calculate_network, calculate_short_circuit, CableResult, CalculationOutput,
    CalculationRequest, NetworkResult, ShortCircuitResult,
};
pub use equations::Impedance;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_ratings, load_request, save_ratings};
pub use ratings::EquipmentRatings;
