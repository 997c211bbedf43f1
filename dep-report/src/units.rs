//! Unit systems and conversions from the store's native units.
//!
//! The store keeps depths in mm and masses per area in kg/m². Conversion is
//! applied to sums after aggregation, never to individual rows before.

use serde::Serialize;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// kg/m² to short tons per acre.
pub const KG_M2_TO_TON_PER_ACRE: f64 = 4.463;

/// kg/m² to metric tonnes per hectare.
pub const KG_M2_TO_TONNE_PER_HA: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// inch, ton/acre
    Imperial,
    /// mm, tonne/ha
    Metric,
}

impl UnitSystem {
    /// Map the request's integer selector: 0 is imperial, anything else metric.
    pub fn from_selector(selector: i64) -> Self {
        if selector == 0 {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        }
    }

    /// Convert a precipitation or runoff depth from mm.
    pub fn depth(self, mm: f64) -> f64 {
        match self {
            UnitSystem::Imperial => mm / MM_PER_INCH,
            UnitSystem::Metric => mm,
        }
    }

    /// Convert a loss or delivery value from kg/m².
    pub fn mass(self, kg_per_m2: f64) -> f64 {
        match self {
            UnitSystem::Imperial => kg_per_m2 * KG_M2_TO_TON_PER_ACRE,
            UnitSystem::Metric => kg_per_m2 * KG_M2_TO_TONNE_PER_HA,
        }
    }

    pub fn depth_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "inch",
            UnitSystem::Metric => "mm",
        }
    }

    pub fn mass_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "ton/acre",
            UnitSystem::Metric => "tonne/ha",
        }
    }
}

/// Fixed-point, two decimals, then the unit label.
pub fn format_quantity(value: f64, label: &str) -> String {
    format!("{:.2} {}", value, label)
}
