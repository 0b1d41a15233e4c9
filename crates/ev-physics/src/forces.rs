//! Road-load forces opposing steady motion.
//!
//! Sign convention: a positive force resists motion. Rolling and drag
//! resistance are never negative for physical inputs; gradient force is
//! negative downhill and can pull the total below zero. The total is never
//! clamped here; the range stage decides what a non-positive load means.

use crate::records::{PhysicalConstants, VehicleSpec};
use ev_core::numeric::Real;
use ev_core::units::{Force, newtons};
use serde::Serialize;

/// Tire/road rolling resistance, `m * Crr * g`.
pub fn rolling_resistance(mass_kg: Real, crr: Real, gravity_m_s2: Real) -> Real {
    mass_kg * crr * gravity_m_s2
}

/// Aerodynamic drag, `0.5 * Cd * A * rho * v^2`.
pub fn drag_force(speed_ms: Real, cd: Real, frontal_area_m2: Real, air_density: Real) -> Real {
    0.5 * cd * frontal_area_m2 * air_density * speed_ms * speed_ms
}

/// Component of weight along the road, `m * g * sin(angle)`.
///
/// Positive uphill, negative downhill.
pub fn gradient_force(mass_kg: Real, angle_rad: Real, gravity_m_s2: Real) -> Real {
    mass_kg * gravity_m_s2 * angle_rad.sin()
}

pub fn total_resistance(rolling_n: Real, drag_n: Real, gradient_n: Real) -> Real {
    rolling_n + drag_n + gradient_n
}

/// All resistive forces at one operating point, in newtons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceBreakdown {
    pub rolling_n: Real,
    pub drag_n: Real,
    pub gradient_n: Real,
    pub total_n: Real,
}

impl ForceBreakdown {
    pub fn evaluate(
        vehicle: &VehicleSpec,
        speed_ms: Real,
        angle_rad: Real,
        constants: &PhysicalConstants,
    ) -> Self {
        let g = constants.gravity_m_s2();
        let rolling_n = rolling_resistance(vehicle.mass_kg(), vehicle.rolling_resistance_coeff(), g);
        let drag_n = drag_force(
            speed_ms,
            vehicle.drag_coefficient(),
            vehicle.frontal_area_m2(),
            constants.air_density_kg_m3(),
        );
        let gradient_n = gradient_force(vehicle.mass_kg(), angle_rad, g);
        Self {
            rolling_n,
            drag_n,
            gradient_n,
            total_n: total_resistance(rolling_n, drag_n, gradient_n),
        }
    }

    pub fn total(&self) -> Force {
        newtons(self.total_n)
    }

    /// True when the slope alone outweighs rolling and drag resistance.
    pub fn is_assisting(&self) -> bool {
        self.total_n <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    const G: Real = 9.81;

    #[test]
    fn rolling_compact_car() {
        assert!((rolling_resistance(1500.0, 0.010, G) - 147.15).abs() < 1e-9);
    }

    #[test]
    fn drag_is_zero_at_rest() {
        assert_eq!(drag_force(0.0, 0.28, 2.2, 1.225), 0.0);
    }

    #[test]
    fn drag_at_highway_speed() {
        let v = 100.0 / 3.6;
        let f = drag_force(v, 0.28, 2.2, 1.225);
        assert!((f - 291.127).abs() < 0.01, "drag = {f}");

        let f = drag_force(90.0 / 3.6, 0.28, 2.2, 1.225);
        assert!((f - 235.813).abs() < 0.01, "drag = {f}");
    }

    #[test]
    fn gradient_flat_and_sign() {
        assert_eq!(gradient_force(1500.0, 0.0, G), 0.0);
        assert!(gradient_force(1500.0, 0.1, G) > 0.0);
        assert!(gradient_force(1500.0, -0.1, G) < 0.0);
    }

    #[test]
    fn breakdown_sums_components() {
        let vehicle = VehicleSpec::from_si(1500.0, 0.28, 2.2, 0.010, 50.0).unwrap();
        let constants = PhysicalConstants::default();
        let f = ForceBreakdown::evaluate(&vehicle, 20.0, 0.05, &constants);
        assert_eq!(f.total_n, f.rolling_n + f.drag_n + f.gradient_n);
        assert_eq!(f.total().value, f.total_n);
        assert!(!f.is_assisting());

        let downhill = ForceBreakdown::evaluate(&vehicle, 2.0, -0.2, &constants);
        assert!(downhill.total_n < 0.0);
        assert!(downhill.is_assisting());
    }

    proptest! {
        #[test]
        fn rolling_is_linear(m in 1.0_f64..5000.0, c in 0.001_f64..0.05, k in 0.1_f64..10.0) {
            let base = rolling_resistance(m, c, G);
            prop_assert!((base - m * c * G).abs() <= 1e-9 * base);
            prop_assert!((rolling_resistance(k * m, c, G) - k * base).abs() <= 1e-9 * k * base);
            prop_assert!((rolling_resistance(m, k * c, G) - k * base).abs() <= 1e-9 * k * base);
        }

        #[test]
        fn drag_non_decreasing(a in 0.0_f64..80.0, b in 0.0_f64..80.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(drag_force(lo, 0.3, 2.5, 1.225) <= drag_force(hi, 0.3, 2.5, 1.225));
        }

        #[test]
        fn gradient_strictly_increasing(
            a in -FRAC_PI_2 + 1e-3..FRAC_PI_2 - 1e-3,
            b in -FRAC_PI_2 + 1e-3..FRAC_PI_2 - 1e-3,
        ) {
            prop_assume!((a - b).abs() > 1e-6);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(gradient_force(1500.0, lo, G) < gradient_force(1500.0, hi, G));
        }

        #[test]
        fn gradient_sign_matches_slope(p in -100.0_f64..100.0) {
            let f = gradient_force(1500.0, crate::normalize::to_radians(p), G);
            if p > 0.0 {
                prop_assert!(f > 0.0);
            } else if p < 0.0 {
                prop_assert!(f < 0.0);
            } else {
                prop_assert_eq!(f, 0.0);
            }
        }
    }
}
