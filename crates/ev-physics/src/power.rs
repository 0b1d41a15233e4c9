//! Mechanical power at the wheels and electrical power drawn from the battery.

use ev_core::numeric::Real;

/// `F * v`. Follows the sign of the force for positive speed.
pub fn power_at_wheels(total_force_n: Real, speed_ms: Real) -> Real {
    total_force_n * speed_ms
}

/// Battery-side power for a drivetrain of the given efficiency.
///
/// `drivetrain_efficiency` must already be checked to lie in (0, 1];
/// `SystemParameters` guarantees this for the pipeline.
pub fn power_from_battery(power_at_wheels_w: Real, drivetrain_efficiency: Real) -> Real {
    debug_assert!(drivetrain_efficiency > 0.0 && drivetrain_efficiency <= 1.0);
    power_at_wheels_w / drivetrain_efficiency
}
