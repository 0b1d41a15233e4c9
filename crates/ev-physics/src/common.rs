//! Common checks shared by the records and the stages.

use crate::error::{PhysicsError, PhysicsResult};
use ev_core::numeric::{ensure_finite, ensure_fraction, ensure_positive};

/// Ensure a vehicle quantity is finite and strictly positive.
pub fn check_spec(value: f64, what: &'static str) -> PhysicsResult<f64> {
    ensure_positive(value, what).map_err(|_| PhysicsError::InvalidSpec { what, value })
}

/// Ensure a physical constant is finite and strictly positive.
pub fn check_constant(value: f64, what: &'static str) -> PhysicsResult<f64> {
    ensure_positive(value, what).map_err(|_| PhysicsError::InvalidConstant { what, value })
}

/// Ensure a drivetrain efficiency lies in (0, 1].
pub fn check_efficiency(value: f64) -> PhysicsResult<f64> {
    ensure_fraction(value, "drivetrain_efficiency")
        .map_err(|_| PhysicsError::InvalidEfficiency { value })
}

/// Ensure a usable battery fraction lies in (0, 1].
pub fn check_usable_fraction(value: f64) -> PhysicsResult<f64> {
    ensure_fraction(value, "battery_usable_fraction")
        .map_err(|_| PhysicsError::InvalidUsableFraction { value })
}

/// Ensure an intermediate value is finite.
pub fn check_finite(value: f64, what: &'static str) -> PhysicsResult<f64> {
    Ok(ensure_finite(value, what)?)
}
