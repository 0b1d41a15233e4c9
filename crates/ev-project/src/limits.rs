//! Accepted input ranges for user-entered values.
//!
//! These are input policy, not physics: the range model accepts any positive
//! mass, but the estimator only claims to be meaningful for road cars. The
//! interactive prompts and scenario validation share this table.

use crate::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimit {
    /// Schema field name
    pub field: &'static str,
    /// Prompt text
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    /// Value used when the prompt is left empty
    pub default: Option<f64>,
}

impl FieldLimit {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                field: self.field.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// The prompt default, or the lower bound for fields without one.
    pub fn default_value(&self) -> f64 {
        self.default.unwrap_or(self.min)
    }
}

pub const BATTERY_CAPACITY_KWH: FieldLimit = FieldLimit {
    field: "battery_capacity_kwh",
    label: "battery capacity",
    unit: "kWh",
    min: 10.0,
    max: 200.0,
    default: None,
};

pub const MASS_KG: FieldLimit = FieldLimit {
    field: "mass_kg",
    label: "vehicle mass",
    unit: "kg",
    min: 800.0,
    max: 3000.0,
    default: None,
};

pub const DRAG_COEFFICIENT: FieldLimit = FieldLimit {
    field: "drag_coefficient",
    label: "drag coefficient",
    unit: "Cd",
    min: 0.15,
    max: 0.50,
    default: Some(0.28),
};

pub const FRONTAL_AREA_M2: FieldLimit = FieldLimit {
    field: "frontal_area_m2",
    label: "frontal area",
    unit: "m²",
    min: 1.5,
    max: 4.0,
    default: Some(2.2),
};

pub const ROLLING_RESISTANCE_COEFF: FieldLimit = FieldLimit {
    field: "rolling_resistance_coeff",
    label: "rolling resistance",
    unit: "Crr",
    min: 0.005,
    max: 0.020,
    default: Some(0.010),
};

pub const SPEED_KMH: FieldLimit = FieldLimit {
    field: "speed_kmh",
    label: "speed",
    unit: "km/h",
    min: 10.0,
    max: 200.0,
    default: None,
};

pub const SLOPE_PERCENT: FieldLimit = FieldLimit {
    field: "slope_percent",
    label: "slope percentage",
    unit: "%",
    min: -15.0,
    max: 15.0,
    default: Some(0.0),
};

pub const DRIVETRAIN_EFFICIENCY_PERCENT: FieldLimit = FieldLimit {
    field: "drivetrain_efficiency_percent",
    label: "drivetrain efficiency",
    unit: "%",
    min: 70.0,
    max: 98.0,
    default: Some(88.0),
};

pub const BATTERY_USABLE_PERCENT: FieldLimit = FieldLimit {
    field: "battery_usable_percent",
    label: "battery usable percentage",
    unit: "%",
    min: 70.0,
    max: 100.0,
    default: Some(90.0),
};

/// Custom vehicle fields in prompt order.
pub const CUSTOM_VEHICLE_FIELDS: [FieldLimit; 5] = [
    BATTERY_CAPACITY_KWH,
    MASS_KG,
    DRAG_COEFFICIENT,
    FRONTAL_AREA_M2,
    ROLLING_RESISTANCE_COEFF,
];
