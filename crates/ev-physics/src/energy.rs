//! Battery energy consumed per kilometer driven.

use crate::common::check_finite;
use crate::error::{PhysicsError, PhysicsResult};
use crate::normalize::{to_kmh, watts_to_kilowatts};
use ev_core::numeric::Real;

/// kWh drawn per km at a steady battery power and speed.
///
/// Energy per distance is undefined when no distance is covered, so a speed
/// that is not strictly positive is an error, never infinity or NaN.
pub fn energy_per_km(power_battery_w: Real, speed_ms: Real) -> PhysicsResult<Real> {
    if !(speed_ms.is_finite() && speed_ms > 0.0) {
        return Err(PhysicsError::InvalidSpeed { speed_mps: speed_ms });
    }
    let power_kw = watts_to_kilowatts(check_finite(power_battery_w, "power_from_battery_w")?);
    let speed_kmh = to_kmh(speed_ms);
    check_finite(power_kw / speed_kmh, "energy_per_km_kwh")
}
