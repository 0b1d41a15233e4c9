//! End-to-end range calculation.

use crate::energy::energy_per_km;
use crate::error::PhysicsResult;
use crate::forces::ForceBreakdown;
use crate::normalize::{to_meters_per_second, to_radians};
use crate::power::{power_at_wheels, power_from_battery};
use crate::range::{estimate_range, usable_battery_energy};
use crate::records::{DrivingConditions, PhysicalConstants, SystemParameters, VehicleSpec};
use ev_core::numeric::{Real, ensure_finite};
use ev_core::units::{Power, watts};
use serde::Serialize;
use tracing::debug;

/// Everything a single calculation produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyResult {
    /// Speed used by the force and energy stages
    pub speed_ms: Real,
    /// Road inclination derived from the grade
    pub slope_angle_rad: Real,
    pub forces: ForceBreakdown,
    pub power_at_wheels_w: Real,
    pub power_from_battery_w: Real,
    pub energy_per_km_kwh: Real,
    pub usable_energy_kwh: Real,
    pub range_km: Real,
}

impl EnergyResult {
    pub fn power_at_wheels(&self) -> Power {
        watts(self.power_at_wheels_w)
    }

    pub fn power_from_battery(&self) -> Power {
        watts(self.power_from_battery_w)
    }

    /// Consumption in the Wh/km figure dashboards usually show.
    pub fn energy_per_km_wh(&self) -> Real {
        self.energy_per_km_kwh * 1000.0
    }
}

/// Estimate range for one vehicle at one steady operating point.
///
/// All inputs are re-validated here, whatever the caller already checked.
/// Each division is guarded before it happens, so the result is either
/// complete and finite or a single `PhysicsError`.
pub fn compute_range(
    vehicle: &VehicleSpec,
    conditions: &DrivingConditions,
    system: &SystemParameters,
    constants: &PhysicalConstants,
) -> PhysicsResult<EnergyResult> {
    vehicle.validate()?;
    conditions.validate()?;
    system.validate()?;
    constants.validate()?;

    let speed_ms = to_meters_per_second(conditions.speed_kmh());
    let slope_angle_rad = to_radians(conditions.slope_percent());

    let forces = ForceBreakdown::evaluate(vehicle, speed_ms, slope_angle_rad, constants);
    debug!(
        rolling_n = forces.rolling_n,
        drag_n = forces.drag_n,
        gradient_n = forces.gradient_n,
        total_n = forces.total_n,
        "road load"
    );

    let power_at_wheels_w = ensure_finite(
        power_at_wheels(forces.total_n, speed_ms),
        "power_at_wheels_w",
    )?;
    let power_from_battery_w =
        power_from_battery(power_at_wheels_w, system.drivetrain_efficiency());
    debug!(power_at_wheels_w, power_from_battery_w, "power");

    let energy_per_km_kwh = energy_per_km(power_from_battery_w, speed_ms)?;
    let usable_energy_kwh = usable_battery_energy(
        vehicle.battery_capacity_kwh(),
        system.battery_usable_fraction(),
    );
    let range_km = estimate_range(usable_energy_kwh, energy_per_km_kwh)?;
    debug!(energy_per_km_kwh, usable_energy_kwh, range_km, "range");

    Ok(EnergyResult {
        speed_ms,
        slope_angle_rad,
        forces,
        power_at_wheels_w,
        power_from_battery_w,
        energy_per_km_kwh,
        usable_energy_kwh,
        range_km,
    })
}
