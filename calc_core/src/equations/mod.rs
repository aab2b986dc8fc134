//! # Power System Equations
//!
//! This module contains the fundamental formulas used in calculations.
//! Having equations in one place enables:
//! - Easy verification against references (IEC 60909, IEC 60949, PUE)
//! - Documentation of assumptions and units
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`impedance`] - Impedance model: magnitude, series composition, referral
//! - [`fault`] - Reactances from ratings and symmetrical fault currents
//! - [`cable`] - Cable load currents and cross-section criteria
//! - [`registry`] - Equation metadata for the generated reference
//!
//! ## Units
//!
//! - **Voltage**: kV
//! - **Power**: MVA
//! - **Impedance**: Ω
//! - **Fault current**: kA (kV / Ω)
//!
//! ## References
//!
//! - IEC 60909-0: Short-circuit currents in three-phase a.c. systems
//! - IEC 60949: Thermally permissible short-circuit currents
//! - PUE: Electrical Installation Rules, chapter 1.3

pub mod cable;
pub mod fault;
pub mod impedance;
pub mod registry;

// Re-export commonly used items
pub use impedance::{voltage_ratio_squared, Impedance};

pub use fault::{
    source_reactance,
    transformer_reactance,
    three_phase_fault_current,
    two_phase_fault_current,
    SQRT_3,
};

pub use cable::{
    normal_mode_current,
    post_emergency_current,
    economic_cross_section,
    thermal_minimum_cross_section,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    equations_for,
    generate_equations_markdown,
};
