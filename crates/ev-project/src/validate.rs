//! Scenario validation logic.

use crate::limits::{
    BATTERY_CAPACITY_KWH, BATTERY_USABLE_PERCENT, DRAG_COEFFICIENT, DRIVETRAIN_EFFICIENCY_PERCENT,
    FRONTAL_AREA_M2, MASS_KG, ROLLING_RESISTANCE_COEFF, SLOPE_PERCENT, SPEED_KMH,
};
use crate::schema::{Scenario, VehicleDef};
use ev_physics::VehicleCatalog;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Unknown vehicle preset: {name} (available: {available})")]
    UnknownPreset { name: String, available: String },

    #[error("Value out of range: {field} = {value} (expected {min} to {max})")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    match &scenario.vehicle {
        VehicleDef::Preset { preset } => {
            if !VehicleCatalog::is_builtin(preset) {
                return Err(ValidationError::UnknownPreset {
                    name: preset.clone(),
                    available: VehicleCatalog::builtin_keys().join(", "),
                });
            }
        }
        VehicleDef::Custom(custom) => {
            BATTERY_CAPACITY_KWH.check(custom.battery_capacity_kwh)?;
            MASS_KG.check(custom.mass_kg)?;
            DRAG_COEFFICIENT.check(custom.drag_coefficient)?;
            FRONTAL_AREA_M2.check(custom.frontal_area_m2)?;
            ROLLING_RESISTANCE_COEFF.check(custom.rolling_resistance_coeff)?;
        }
    }

    SPEED_KMH.check(scenario.conditions.speed_kmh)?;
    SLOPE_PERCENT.check(scenario.conditions.slope_percent)?;

    DRIVETRAIN_EFFICIENCY_PERCENT.check(scenario.system.drivetrain_efficiency_percent)?;
    BATTERY_USABLE_PERCENT.check(scenario.system.battery_usable_percent)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConditionsDef, CustomVehicleDef, SystemDef};

    fn scenario(vehicle: VehicleDef) -> Scenario {
        Scenario {
            version: 1,
            name: "test".to_string(),
            vehicle,
            conditions: ConditionsDef {
                speed_kmh: 100.0,
                slope_percent: 0.0,
            },
            system: SystemDef::default(),
            constants: None,
        }
    }

    #[test]
    fn preset_scenario_validates() {
        let s = scenario(VehicleDef::Preset {
            preset: "compact".to_string(),
        });
        assert!(validate_scenario(&s).is_ok());
    }

    #[test]
    fn preset_matched_by_display_name() {
        let s = scenario(VehicleDef::Preset {
            preset: "Volvo EX90".to_string(),
        });
        assert!(validate_scenario(&s).is_ok());
    }

    #[test]
    fn unknown_preset_rejected() {
        let s = scenario(VehicleDef::Preset {
            preset: "minivan".to_string(),
        });
        match validate_scenario(&s) {
            Err(ValidationError::UnknownPreset { name, available }) => {
                assert_eq!(name, "minivan");
                assert_eq!(available, "compact, suv, sports");
            }
            other => panic!("expected UnknownPreset, got {other:?}"),
        }
    }

    #[test]
    fn heavy_custom_vehicle_rejected() {
        let s = scenario(VehicleDef::Custom(CustomVehicleDef {
            name: None,
            battery_capacity_kwh: 100.0,
            mass_kg: 4500.0,
            drag_coefficient: 0.3,
            frontal_area_m2: 2.5,
            rolling_resistance_coeff: 0.01,
        }));
        match validate_scenario(&s) {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "mass_kg"),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn future_version_rejected() {
        let mut s = scenario(VehicleDef::Preset {
            preset: "suv".to_string(),
        });
        s.version = 99;
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        );
    }

    #[test]
    fn steep_slope_rejected_by_policy() {
        let mut s = scenario(VehicleDef::Preset {
            preset: "suv".to_string(),
        });
        s.conditions.slope_percent = -25.0;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
