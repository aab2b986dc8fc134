//! # Equipment Ratings
//!
//! Every engineering constant the calculators use lives here as a named
//! field: voltages, transformer nameplate data, the downstream line, and the
//! cable sizing coefficients. The defaults describe the reference installation
//! (10 kV cable feeders, a 10.5 kV / 6.3 MVA unit transformer, and a 115/11 kV
//! 6.3 MVA substation transformer with a 12.52 + j6.88 Ω outgoing line).
//!
//! Ratings are loaded from TOML. Any field left out keeps its default, so a
//! file only needs to name what differs. Nested tables merge the same way: a
//! transformer or line field that is omitted keeps the default of the section
//! it belongs to.
//!
//! ```toml
//! [network]
//! hv_voltage_kv = 110.0
//!
//! [network.transformer]
//! rated_power_mva = 10.0
//!
//! [network.line]
//! resistance = 8.4
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::ratings::EquipmentRatings;
//!
//! let ratings = EquipmentRatings::from_toml_str("[cable]\nparallel_cables = 3\n").unwrap();
//! assert_eq!(ratings.cable.parallel_cables, 3);
//! assert_eq!(ratings.cable.thermal_coefficient, 92.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::impedance::Impedance;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Kilovolts, Megavoltamperes, Percent};

/// Nameplate data of a two-winding transformer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformerRating {
    /// Short-circuit voltage uk in percent
    pub impedance_voltage_pct: Percent,
    /// Rated apparent power in MVA
    pub rated_power_mva: Megavoltamperes,
}

impl TransformerRating {
    pub const fn new(impedance_voltage_pct: f64, rated_power_mva: f64) -> Self {
        Self {
            impedance_voltage_pct: Percent(impedance_voltage_pct),
            rated_power_mva: Megavoltamperes(rated_power_mva),
        }
    }

    fn validate(&self, prefix: &str) -> CalcResult<()> {
        require_non_negative(
            &format!("{}.impedance_voltage_pct", prefix),
            self.impedance_voltage_pct.value(),
        )?;
        require_positive(&format!("{}.rated_power_mva", prefix), self.rated_power_mva.value())
    }
}

/// Coefficients for sizing a group of parallel medium-voltage cables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableRatings {
    /// Nominal line voltage in kV
    pub nominal_voltage_kv: Kilovolts,
    /// Cables sharing the load in normal operation
    pub parallel_cables: u32,
    /// Economic current density j_ek in A/mm²
    pub economic_current_density: f64,
    /// Thermal coefficient Ct in A·√s/mm²
    pub thermal_coefficient: f64,
}

impl Default for CableRatings {
    fn default() -> Self {
        Self {
            nominal_voltage_kv: Kilovolts(10.0),
            parallel_cables: 2,
            economic_current_density: 1.4,
            thermal_coefficient: 92.0,
        }
    }
}

/// Source and unit transformer for the single-bus short-circuit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShortCircuitSection")]
pub struct ShortCircuitRatings {
    /// Average operating voltage of the faulted bus in kV
    pub base_voltage_kv: Kilovolts,
    /// Transformer between source and bus
    pub transformer: TransformerRating,
}

impl Default for ShortCircuitRatings {
    fn default() -> Self {
        Self {
            base_voltage_kv: Kilovolts(10.5),
            transformer: TransformerRating::new(10.5, 6.3),
        }
    }
}

/// Substation transformer and outgoing line for the three-bus network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "NetworkSection")]
pub struct NetworkRatings {
    /// High-voltage bus voltage in kV (source impedances are referred here)
    pub hv_voltage_kv: Kilovolts,
    /// Low-voltage bus voltage in kV
    pub lv_voltage_kv: Kilovolts,
    /// Substation transformer
    pub transformer: TransformerRating,
    /// Outgoing line to the downstream point
    pub line: Impedance,
}

impl Default for NetworkRatings {
    fn default() -> Self {
        Self {
            hv_voltage_kv: Kilovolts(115.0),
            lv_voltage_kv: Kilovolts(11.0),
            transformer: TransformerRating::new(11.1, 6.3),
            line: Impedance::new(12.52, 6.88),
        }
    }
}

// ============================================================================
// File sections
// ============================================================================

// Sections as written in a ratings file. Missing fields fall back to the
// default of the enclosing section.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TransformerSection {
    impedance_voltage_pct: Option<Percent>,
    rated_power_mva: Option<Megavoltamperes>,
}

impl TransformerSection {
    fn over(self, base: TransformerRating) -> TransformerRating {
        TransformerRating {
            impedance_voltage_pct: self.impedance_voltage_pct.unwrap_or(base.impedance_voltage_pct),
            rated_power_mva: self.rated_power_mva.unwrap_or(base.rated_power_mva),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LineSection {
    resistance: Option<f64>,
    reactance: Option<f64>,
}

impl LineSection {
    fn over(self, base: Impedance) -> Impedance {
        Impedance::new(
            self.resistance.unwrap_or(base.resistance()),
            self.reactance.unwrap_or(base.reactance()),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShortCircuitSection {
    base_voltage_kv: Option<Kilovolts>,
    transformer: TransformerSection,
}

impl From<ShortCircuitSection> for ShortCircuitRatings {
    fn from(section: ShortCircuitSection) -> Self {
        let base = ShortCircuitRatings::default();
        ShortCircuitRatings {
            base_voltage_kv: section.base_voltage_kv.unwrap_or(base.base_voltage_kv),
            transformer: section.transformer.over(base.transformer),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NetworkSection {
    hv_voltage_kv: Option<Kilovolts>,
    lv_voltage_kv: Option<Kilovolts>,
    transformer: TransformerSection,
    line: LineSection,
}

impl From<NetworkSection> for NetworkRatings {
    fn from(section: NetworkSection) -> Self {
        let base = NetworkRatings::default();
        NetworkRatings {
            hv_voltage_kv: section.hv_voltage_kv.unwrap_or(base.hv_voltage_kv),
            lv_voltage_kv: section.lv_voltage_kv.unwrap_or(base.lv_voltage_kv),
            transformer: section.transformer.over(base.transformer),
            line: section.line.over(base.line),
        }
    }
}

/// All ratings, one section per calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentRatings {
    pub cable: CableRatings,
    pub short_circuit: ShortCircuitRatings,
    pub network: NetworkRatings,
}

impl EquipmentRatings {
    /// Parse ratings from TOML and validate them.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let ratings: EquipmentRatings = toml::from_str(text)
            .map_err(|e| CalcError::serialization(format!("Invalid ratings TOML: {}", e)))?;
        ratings.validate()?;
        Ok(ratings)
    }

    /// Render the ratings as TOML.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Check that every rating that divides or scales a formula is usable.
    ///
    /// Calculation inputs are never rejected; ratings are, because a zero
    /// rated power or voltage would silently poison every result.
    pub fn validate(&self) -> CalcResult<()> {
        let cable = &self.cable;
        require_positive("cable.nominal_voltage_kv", cable.nominal_voltage_kv.value())?;
        if cable.parallel_cables == 0 {
            return Err(CalcError::invalid_rating(
                "cable.parallel_cables",
                "0",
                "At least one cable is required",
            ));
        }
        require_positive("cable.economic_current_density", cable.economic_current_density)?;
        require_positive("cable.thermal_coefficient", cable.thermal_coefficient)?;

        let sc = &self.short_circuit;
        require_positive("short_circuit.base_voltage_kv", sc.base_voltage_kv.value())?;
        sc.transformer.validate("short_circuit.transformer")?;

        let net = &self.network;
        require_positive("network.hv_voltage_kv", net.hv_voltage_kv.value())?;
        require_positive("network.lv_voltage_kv", net.lv_voltage_kv.value())?;
        net.transformer.validate("network.transformer")?;
        require_finite("network.line.resistance", net.line.resistance())?;
        require_finite("network.line.reactance", net.line.reactance())?;

        Ok(())
    }
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_rating(field, value.to_string(), "Must be a finite number"));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_rating(field, value.to_string(), "Must be positive"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_rating(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}
