//! Plain-text rendering of calculation results.

use calc_core::calculations::{CableResult, CalculationOutput, NetworkResult, ShortCircuitResult};
use calc_core::equations::Equation;

const RULE: &str = "═══════════════════════════════════════";

pub fn output(output: &CalculationOutput) -> String {
    match output {
        CalculationOutput::Cable(r) => cable(r),
        CalculationOutput::ShortCircuit(r) => short_circuit(r),
        CalculationOutput::Network(r) => network(r),
    }
}

fn header(title: &str) -> String {
    format!("{RULE}\n  {title}\n{RULE}\n")
}

pub fn cable(r: &CableResult) -> String {
    let mut out = header("CABLE SIZING");
    out.push_str(&format!("Normal mode current:     {} A\n", r.normal_current));
    out.push_str(&format!("Post-emergency current:  {} A\n", r.post_emergency_current));
    out.push_str(&format!("Economic cross-section:  {} mm²\n", r.economic_cross_section));
    out.push_str(&format!("Minimum cross-section:   {} mm²\n", r.minimum_cross_section));
    out
}

pub fn short_circuit(r: &ShortCircuitResult) -> String {
    let mut out = header("SHORT-CIRCUIT AT 10 kV BUS");
    out.push_str(&format!("Xc:                              {} Ω\n", r.reactor_impedance));
    out.push_str(&format!("Xt:                              {} Ω\n", r.transformer_impedance));
    out.push_str(&format!("Total impedance:                 {} Ω\n", r.total_impedance));
    out.push_str(&format!(
        "Initial three-phase SC current:  {} kA\n",
        r.initial_short_circuit_current
    ));
    out
}

pub fn network(r: &NetworkResult) -> String {
    let mut out = header("NETWORK SC CURRENTS (normal/minimum)");
    for (name, bus) in r.points() {
        out.push_str(&format!("{}:\n", name));
        out.push_str(&format!("  Three-phase: {}/{} kA\n", bus.three_phase, bus.three_phase_min));
        out.push_str(&format!("  Two-phase:   {}/{} kA\n", bus.two_phase, bus.two_phase_min));
    }
    out
}

/// Short listing of selected equations
pub fn equations(equations: &[Equation]) -> String {
    let mut out = String::new();
    for eq in equations {
        let meta = eq.metadata();
        out.push_str(&format!(
            "{:<32} {}  [{}]\n",
            meta.name,
            meta.formula_plain,
            meta.reference.citation()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{calculate_cable, calculate_network};

    #[test]
    fn test_cable_text() {
        let text = cable(&calculate_cable(1300.0, 2500.0, 2.5));
        assert!(text.contains("Normal mode current:     37.5 A"));
        assert!(text.contains("Minimum cross-section:   43 mm²"));
    }

    #[test]
    fn test_network_text_lists_all_points() {
        let text = network(&calculate_network(10.65, 24.02, 34.88, 65.68));
        assert!(text.contains("110 kV bus:"));
        assert!(text.contains("10 kV bus:\n  Three-phase: 2.7/2.3 kA\n  Two-phase:   2.3/2.0 kA"));
        assert!(text.contains("Point 10:"));
    }
}
