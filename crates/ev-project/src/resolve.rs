//! Turning a scenario file into the records the range model consumes.

use crate::ProjectResult;
use crate::schema::{Scenario, VehicleDef};
use crate::validate::ValidationError;
use ev_physics::{
    DrivingConditions, EnergyResult, PhysicalConstants, PhysicsResult, SweepDefinition,
    SweepResult, SystemParameters, VehicleCatalog, VehicleSpec, compute_range, execute_sweep,
};

/// A scenario with the preset looked up and every record constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub name: String,
    pub vehicle_name: String,
    pub vehicle: VehicleSpec,
    pub conditions: DrivingConditions,
    pub system: SystemParameters,
    pub constants: PhysicalConstants,
}

impl Scenario {
    pub fn resolve(&self, catalog: &VehicleCatalog) -> ProjectResult<ResolvedScenario> {
        let (vehicle_name, vehicle) = match &self.vehicle {
            VehicleDef::Preset { preset } => {
                let profile =
                    catalog
                        .get(preset)
                        .ok_or_else(|| ValidationError::UnknownPreset {
                            name: preset.clone(),
                            available: catalog.keys().join(", "),
                        })?;
                (profile.name.to_string(), profile.spec)
            }
            VehicleDef::Custom(custom) => (
                custom
                    .name
                    .clone()
                    .unwrap_or_else(|| "Custom vehicle".to_string()),
                VehicleSpec::from_si(
                    custom.mass_kg,
                    custom.drag_coefficient,
                    custom.frontal_area_m2,
                    custom.rolling_resistance_coeff,
                    custom.battery_capacity_kwh,
                )?,
            ),
        };

        let conditions =
            DrivingConditions::from_kmh(self.conditions.speed_kmh, self.conditions.slope_percent)?;
        let system = SystemParameters::from_percent(
            self.system.drivetrain_efficiency_percent,
            self.system.battery_usable_percent,
        )?;
        let constants_def = self.constants.clone().unwrap_or_default();
        let constants = PhysicalConstants::from_si(
            constants_def.gravity_m_s2,
            constants_def.air_density_kg_m3,
        )?;

        Ok(ResolvedScenario {
            name: self.name.clone(),
            vehicle_name,
            vehicle,
            conditions,
            system,
            constants,
        })
    }
}

impl ResolvedScenario {
    pub fn compute(&self) -> PhysicsResult<EnergyResult> {
        compute_range(&self.vehicle, &self.conditions, &self.system, &self.constants)
    }

    pub fn sweep(&self, definition: &SweepDefinition) -> SweepResult {
        execute_sweep(
            definition,
            &self.vehicle,
            &self.conditions,
            &self.system,
            &self.constants,
        )
    }
}
