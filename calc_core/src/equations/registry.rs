//! # Equation Registry
//!
//! Central registry of every formula the calculators evaluate. Each equation
//! carries its formula, variables, reference and the function implementing it,
//! so the math can be audited without reading the calculation code.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, equations_for};
//!
//! let meta = Equation::TwoPhaseFaultCurrent.metadata();
//! assert_eq!(meta.formula_plain, "I2 = I3 * sqrt(3)/2");
//!
//! // Formulas behind one calculator
//! assert!(equations_for("Network").contains(&Equation::ImpedanceReferral));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the standard or textbook a formula comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// IEC 60909-0 - Short-circuit currents in three-phase a.c. systems
    Iec60909,
    /// IEC 60949 - Thermally permissible short-circuit currents
    Iec60949,
    /// PUE (Electrical Installation Rules)
    Pue { table: &'static str },
    /// Circuit theory (no specific code reference needed)
    CircuitTheory,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Iec60909 => "IEC 60909-0".to_string(),
            CodeReference::Iec60949 => "IEC 60949".to_string(),
            CodeReference::Pue { table } => format!("PUE Table {}", table),
            CodeReference::CircuitTheory => "Circuit Theory".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Impedance composition and referral
    Impedances,
    /// Reactances from ratings and fault currents
    FaultCurrents,
    /// Cable load currents and cross-sections
    CableSizing,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Impedances => "Impedances",
            EquationCategory::FaultCurrents => "Fault Currents",
            EquationCategory::CableSizing => "Cable Sizing",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "U", "Sk", "Xt")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kV", "MVA", "ohm")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas used by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Impedances
    // -------------------------------------------------------------------------
    /// |Z| = sqrt(R^2 + X^2)
    ImpedanceMagnitude,
    /// Z = Z1 + Z2
    SeriesImpedance,
    /// k^2 = (U_to / U_from)^2
    VoltageRatioSquared,
    /// Z' = Z * k^2
    ImpedanceReferral,

    // -------------------------------------------------------------------------
    // Fault currents
    // -------------------------------------------------------------------------
    /// Xc = U^2 / Sk
    SourceReactance,
    /// Xt = uk/100 * U^2 / S
    TransformerReactance,
    /// I3 = U / (sqrt(3) * |Z|)
    ThreePhaseFaultCurrent,
    /// I2 = I3 * sqrt(3)/2
    TwoPhaseFaultCurrent,

    // -------------------------------------------------------------------------
    // Cable sizing
    // -------------------------------------------------------------------------
    /// Im = (Sm / n) / (sqrt(3) * U)
    NormalModeCurrent,
    /// Im.pa = n * Im
    PostEmergencyCurrent,
    /// s_ek = Im / j_ek
    EconomicCrossSection,
    /// s_min = Ik * sqrt(tf) / Ct
    ThermalMinimumCrossSection,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ImpedanceMagnitude => EquationMetadata {
                name: "Impedance Magnitude",
                description: "Magnitude of a series resistance and reactance",
                formula_plain: "|Z| = sqrt(R^2 + X^2)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("R", "Resistance", "ohm"),
                    Variable::new("X", "Reactance", "ohm"),
                ],
                assumptions: vec![],
                category: EquationCategory::Impedances,
                source_module: "equations/impedance.rs",
                source_function: "Impedance::magnitude",
            },

            Equation::SeriesImpedance => EquationMetadata {
                name: "Series Impedance",
                description: "Impedance of elements connected in series",
                formula_plain: "Z = (R1 + R2) + j(X1 + X2)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("Z1", "First element", "ohm"),
                    Variable::new("Z2", "Second element", "ohm"),
                ],
                assumptions: vec!["Both impedances referred to the same voltage"],
                category: EquationCategory::Impedances,
                source_module: "equations/impedance.rs",
                source_function: "Impedance::add_series",
            },

            Equation::VoltageRatioSquared => EquationMetadata {
                name: "Squared Voltage Ratio",
                description: "Factor for referring an impedance across a transformer",
                formula_plain: "k^2 = (U_to / U_from)^2",
                reference: CodeReference::Iec60909,
                variables: vec![
                    Variable::new("U_from", "Voltage the impedance is given at", "kV"),
                    Variable::new("U_to", "Voltage it is referred to", "kV"),
                ],
                assumptions: vec!["Average operating voltages used as the ratio"],
                category: EquationCategory::Impedances,
                source_module: "equations/impedance.rs",
                source_function: "voltage_ratio_squared",
            },

            Equation::ImpedanceReferral => EquationMetadata {
                name: "Impedance Referral",
                description: "Impedance seen from the other side of a transformer",
                formula_plain: "R' = R * k^2, X' = X * k^2",
                reference: CodeReference::Iec60909,
                variables: vec![Variable::new("k^2", "Squared voltage ratio", "-")],
                assumptions: vec![],
                category: EquationCategory::Impedances,
                source_module: "equations/impedance.rs",
                source_function: "Impedance::transformed",
            },

            Equation::SourceReactance => EquationMetadata {
                name: "Source Reactance",
                description: "Equivalent reactance of the supply system from its short-circuit power",
                formula_plain: "Xc = U^2 / Sk",
                reference: CodeReference::Iec60909,
                variables: vec![
                    Variable::new("U", "Bus voltage", "kV"),
                    Variable::new("Sk", "Short-circuit power of the source", "MVA"),
                ],
                assumptions: vec!["Source resistance neglected", "Sk = 0 gives an infinite reactance"],
                category: EquationCategory::FaultCurrents,
                source_module: "equations/fault.rs",
                source_function: "source_reactance",
            },

            Equation::TransformerReactance => EquationMetadata {
                name: "Transformer Reactance",
                description: "Reactance of a transformer from its nameplate data",
                formula_plain: "Xt = uk/100 * U^2 / S",
                reference: CodeReference::Iec60909,
                variables: vec![
                    Variable::new("uk", "Short-circuit voltage", "%"),
                    Variable::new("U", "Voltage the reactance is referred to", "kV"),
                    Variable::new("S", "Rated power", "MVA"),
                ],
                assumptions: vec!["Winding resistance neglected"],
                category: EquationCategory::FaultCurrents,
                source_module: "equations/fault.rs",
                source_function: "transformer_reactance",
            },

            Equation::ThreePhaseFaultCurrent => EquationMetadata {
                name: "Three-Phase Fault Current",
                description: "Initial symmetrical current of a balanced three-phase fault",
                formula_plain: "I3 = U / (sqrt(3) * |Z|)",
                reference: CodeReference::Iec60909,
                variables: vec![
                    Variable::new("U", "Bus voltage", "kV"),
                    Variable::new("|Z|", "Impedance to the fault", "ohm"),
                    Variable::new("I3", "Three-phase fault current", "kA"),
                ],
                assumptions: vec!["Voltage factor c = 1.0", "Bolted fault"],
                category: EquationCategory::FaultCurrents,
                source_module: "equations/fault.rs",
                source_function: "three_phase_fault_current",
            },

            Equation::TwoPhaseFaultCurrent => EquationMetadata {
                name: "Two-Phase Fault Current",
                description: "Line-to-line fault current from the three-phase current",
                formula_plain: "I2 = I3 * sqrt(3)/2",
                reference: CodeReference::Iec60909,
                variables: vec![Variable::new("I2", "Two-phase fault current", "kA")],
                assumptions: vec!["Negative-sequence impedance equal to positive-sequence"],
                category: EquationCategory::FaultCurrents,
                source_module: "equations/fault.rs",
                source_function: "two_phase_fault_current",
            },

            Equation::NormalModeCurrent => EquationMetadata {
                name: "Normal-Mode Current",
                description: "Current per cable with the load shared by all parallel cables",
                formula_plain: "Im = (Sm / n) / (sqrt(3) * U)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("Sm", "Apparent power of the group", "kVA"),
                    Variable::new("n", "Parallel cables", "-"),
                    Variable::new("U", "Nominal voltage", "kV"),
                ],
                assumptions: vec!["Equal load sharing"],
                category: EquationCategory::CableSizing,
                source_module: "equations/cable.rs",
                source_function: "normal_mode_current",
            },

            Equation::PostEmergencyCurrent => EquationMetadata {
                name: "Post-Emergency Current",
                description: "Current with one cable of the group out of service",
                formula_plain: "Im.pa = n * Im",
                reference: CodeReference::CircuitTheory,
                variables: vec![Variable::new("Im", "Normal-mode current", "A")],
                assumptions: vec!["The remaining cable carries the full group load"],
                category: EquationCategory::CableSizing,
                source_module: "equations/cable.rs",
                source_function: "post_emergency_current",
            },

            Equation::EconomicCrossSection => EquationMetadata {
                name: "Economic Cross-Section",
                description: "Cross-section minimising lifetime cost at a given current density",
                formula_plain: "s_ek = Im / j_ek",
                reference: CodeReference::Pue { table: "1.3.36" },
                variables: vec![Variable::new("j_ek", "Economic current density", "A/mm^2")],
                assumptions: vec![],
                category: EquationCategory::CableSizing,
                source_module: "equations/cable.rs",
                source_function: "economic_cross_section",
            },

            Equation::ThermalMinimumCrossSection => EquationMetadata {
                name: "Thermal Minimum Cross-Section",
                description: "Smallest cross-section that withstands short-circuit heating",
                formula_plain: "s_min = Ik * sqrt(tf) / Ct",
                reference: CodeReference::Iec60949,
                variables: vec![
                    Variable::new("Ik", "Short-circuit current", "A"),
                    Variable::new("tf", "Fault clearing time", "s"),
                    Variable::new("Ct", "Thermal coefficient", "A*s^0.5/mm^2"),
                ],
                assumptions: vec!["Adiabatic heating"],
                category: EquationCategory::CableSizing,
                source_module: "equations/cable.rs",
                source_function: "thermal_minimum_cross_section",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Categories in reference order
    pub fn all_categories() -> Vec<EquationCategory> {
        vec![
            EquationCategory::Impedances,
            EquationCategory::FaultCurrents,
            EquationCategory::CableSizing,
        ]
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::ImpedanceMagnitude,
    Equation::SeriesImpedance,
    Equation::VoltageRatioSquared,
    Equation::ImpedanceReferral,
    Equation::SourceReactance,
    Equation::TransformerReactance,
    Equation::ThreePhaseFaultCurrent,
    Equation::TwoPhaseFaultCurrent,
    Equation::NormalModeCurrent,
    Equation::PostEmergencyCurrent,
    Equation::EconomicCrossSection,
    Equation::ThermalMinimumCrossSection,
];

/// Equations evaluated by one calculator, keyed by its type name
/// (`"Cable"`, `"ShortCircuit"`, `"Network"`).
pub fn equations_for(calc_type: &str) -> Vec<Equation> {
    match calc_type {
        "Cable" => vec![
            Equation::NormalModeCurrent,
            Equation::PostEmergencyCurrent,
            Equation::EconomicCrossSection,
            Equation::ThermalMinimumCrossSection,
        ],
        "ShortCircuit" => vec![
            Equation::SourceReactance,
            Equation::TransformerReactance,
            Equation::ThreePhaseFaultCurrent,
        ],
        "Network" => vec![
            Equation::TransformerReactance,
            Equation::SeriesImpedance,
            Equation::ImpedanceMagnitude,
            Equation::VoltageRatioSquared,
            Equation::ImpedanceReferral,
            Equation::ThreePhaseFaultCurrent,
            Equation::TwoPhaseFaultCurrent,
        ],
        _ => Vec::new(),
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// # Example
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Faultline Equations Reference"));
/// assert!(markdown.contains("## Fault Currents"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Faultline Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used in Faultline calculations.
Each equation includes its formula, reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Voltage | kV |
| Power | MVA (cable load: kVA) |
| Impedance | ohm |
| Fault current | kA (cable thermal check: A) |
| Cross-section | mm^2 |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
