//! Scenario file schema definitions.
//!
//! Field names carry their units. Efficiencies are stored as percentages, the
//! same way they are typed at the prompt.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub vehicle: VehicleDef,
    pub conditions: ConditionsDef,
    #[serde(default)]
    pub system: SystemDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<ConstantsDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleDef {
    /// A catalog vehicle, by key or display name
    Preset { preset: String },
    Custom(CustomVehicleDef),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomVehicleDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub battery_capacity_kwh: f64,
    pub mass_kg: f64,
    #[serde(default = "default_drag_coefficient")]
    pub drag_coefficient: f64,
    #[serde(default = "default_frontal_area_m2")]
    pub frontal_area_m2: f64,
    #[serde(default = "default_rolling_resistance_coeff")]
    pub rolling_resistance_coeff: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionsDef {
    pub speed_kmh: f64,
    #[serde(default)]
    pub slope_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    #[serde(default = "default_drivetrain_efficiency_percent")]
    pub drivetrain_efficiency_percent: f64,
    #[serde(default = "default_battery_usable_percent")]
    pub battery_usable_percent: f64,
}

impl Default for SystemDef {
    fn default() -> Self {
        Self {
            drivetrain_efficiency_percent: default_drivetrain_efficiency_percent(),
            battery_usable_percent: default_battery_usable_percent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantsDef {
    #[serde(default = "default_gravity_m_s2")]
    pub gravity_m_s2: f64,
    #[serde(default = "default_air_density_kg_m3")]
    pub air_density_kg_m3: f64,
}

impl Default for ConstantsDef {
    fn default() -> Self {
        Self {
            gravity_m_s2: default_gravity_m_s2(),
            air_density_kg_m3: default_air_density_kg_m3(),
        }
    }
}

fn default_drag_coefficient() -> f64 {
    crate::limits::DRAG_COEFFICIENT.default_value()
}

fn default_frontal_area_m2() -> f64 {
    crate::limits::FRONTAL_AREA_M2.default_value()
}

fn default_rolling_resistance_coeff() -> f64 {
    crate::limits::ROLLING_RESISTANCE_COEFF.default_value()
}

fn default_drivetrain_efficiency_percent() -> f64 {
    crate::limits::DRIVETRAIN_EFFICIENCY_PERCENT.default_value()
}

fn default_battery_usable_percent() -> f64 {
    crate::limits::BATTERY_USABLE_PERCENT.default_value()
}

fn default_gravity_m_s2() -> f64 {
    ev_core::units::constants::GRAVITY_MPS2
}

fn default_air_density_kg_m3() -> f64 {
    ev_core::units::constants::AIR_DENSITY_KG_M3
}
