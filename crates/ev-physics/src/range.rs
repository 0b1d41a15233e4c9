//! Usable battery energy and the range it buys.

use crate::common::check_finite;
use crate::error::{PhysicsError, PhysicsResult};
use ev_core::numeric::Real;

pub fn usable_battery_energy(capacity_kwh: Real, usable_fraction: Real) -> Real {
    capacity_kwh * usable_fraction
}

/// Range in km for a given usable energy and consumption.
///
/// Consumption at or below zero means the grade is doing the work. Energy
/// recovery is not modeled, so that case is rejected instead of reporting a
/// negative or unbounded range.
pub fn estimate_range(usable_energy_kwh: Real, energy_per_km_kwh: Real) -> PhysicsResult<Real> {
    if !(energy_per_km_kwh > 0.0) {
        return Err(PhysicsError::NonPositiveConsumption {
            kwh_per_km: energy_per_km_kwh,
        });
    }
    check_finite(usable_energy_kwh / energy_per_km_kwh, "range_km")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn usable_energy() {
        assert!((usable_battery_energy(50.0, 0.9) - 45.0).abs() < 1e-12);
        assert_eq!(usable_battery_energy(75.0, 1.0), 75.0);
    }

    #[test]
    fn range_basic() {
        let r = estimate_range(45.0, 0.15).unwrap();
        assert!((r - 300.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_consumption_rejected() {
        assert_eq!(
            estimate_range(45.0, 0.0),
            Err(PhysicsError::NonPositiveConsumption { kwh_per_km: 0.0 })
        );
        assert!(matches!(
            estimate_range(45.0, -0.3),
            Err(PhysicsError::NonPositiveConsumption { .. })
        ));
        assert!(estimate_range(45.0, f64::NAN).is_err());
    }

    #[test]
    fn tiny_consumption_overflow_is_caught() {
        assert!(matches!(
            estimate_range(f64::MAX, 1e-300),
            Err(PhysicsError::NonFinite { what: "range_km", .. })
        ));
    }

    proptest! {
        #[test]
        fn decreasing_in_consumption(
            e in 1.0_f64..200.0,
            a in 0.01_f64..1.0,
            b in 0.01_f64..1.0,
        ) {
            prop_assume!((a - b).abs() > 1e-9);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(estimate_range(e, lo).unwrap() > estimate_range(e, hi).unwrap());
        }

        #[test]
        fn increasing_in_energy(
            epk in 0.05_f64..0.8,
            a in 1.0_f64..200.0,
            b in 1.0_f64..200.0,
        ) {
            prop_assume!((a - b).abs() > 1e-9);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(estimate_range(lo, epk).unwrap() < estimate_range(hi, epk).unwrap());
        }
    }
}
