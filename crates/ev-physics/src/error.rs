//! Error types for the range model.

use ev_core::CoreError;
use thiserror::Error;

/// Precondition violations raised by the range model.
///
/// None of these are recoverable inside the model: a calculation either
/// produces a complete result or fails with exactly one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Invalid speed: {speed_mps} m/s (energy per distance needs a positive speed)")]
    InvalidSpeed { speed_mps: f64 },

    #[error("Invalid drivetrain efficiency: {value} (must be in (0, 1])")]
    InvalidEfficiency { value: f64 },

    #[error(
        "Non-positive energy consumption: {kwh_per_km} kWh/km (the slope drives the vehicle; regeneration is not modeled)"
    )]
    NonPositiveConsumption { kwh_per_km: f64 },

    #[error("Invalid vehicle spec: {what} = {value} (must be positive)")]
    InvalidSpec { what: &'static str, value: f64 },

    #[error("Invalid usable battery fraction: {value} (must be in (0, 1])")]
    InvalidUsableFraction { value: f64 },

    #[error("Invalid physical constant: {what} = {value} (must be positive)")]
    InvalidConstant { what: &'static str, value: f64 },

    #[error("Invalid driving conditions: {what} = {value}")]
    InvalidConditions { what: &'static str, value: f64 },

    #[error("Non-finite intermediate value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

impl From<CoreError> for PhysicsError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, value } => PhysicsError::NonFinite { what, value },
            CoreError::NonPositive { what, value } => PhysicsError::InvalidSpec { what, value },
            CoreError::OutOfRange { what, value, .. } => {
                PhysicsError::InvalidConditions { what, value }
            }
        }
    }
}
