// ev-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, Energy as UomEnergy, Force as UomForce,
    Mass as UomMass, MassDensity as UomMassDensity, Power as UomPower, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type Energy = UomEnergy;
pub type Force = UomForce;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Velocity = UomVelocity;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn kwh(v: f64) -> Energy {
    use uom::si::energy::kilowatt_hour;
    Energy::new::<kilowatt_hour>(v)
}

#[inline]
pub fn kmh(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn newtons(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn in_kwh(e: Energy) -> f64 {
    use uom::si::energy::kilowatt_hour;
    e.get::<kilowatt_hour>()
}

#[inline]
pub fn in_kmh(v: Velocity) -> f64 {
    use uom::si::velocity::kilometer_per_hour;
    v.get::<kilometer_per_hour>()
}

pub mod constants {
    use super::*;

    /// Earth's gravitational acceleration as used for road-load estimates.
    pub const GRAVITY_MPS2: f64 = 9.81;

    /// Air density at sea level, 15 °C.
    pub const AIR_DENSITY_KG_M3: f64 = 1.225;

    #[inline]
    pub fn gravity() -> Accel {
        mps2(GRAVITY_MPS2)
    }

    #[inline]
    pub fn air_density() -> Density {
        kg_per_m3(AIR_DENSITY_KG_M3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn constructors_smoke() {
        let _m = kg(1500.0);
        let _a = m2(2.2);
        let _f = newtons(382.5);
        let _p = watts(10_626.0);
        let _g = constants::gravity();
        let _rho = constants::air_density();
    }

    #[test]
    fn si_base_values() {
        assert_eq!(kg(1500.0).value, 1500.0);
        assert_eq!(m2(2.2).value, 2.2);
        assert_eq!(constants::gravity().value, constants::GRAVITY_MPS2);
        assert!((kwh(1.0).value - 3.6e6).abs() < 1e-6);
        assert!((kmh(36.0).value - 10.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn kwh_round_trips(v in 0.0_f64..500.0) {
            prop_assert!((in_kwh(kwh(v)) - v).abs() <= 1e-9 * v.max(1.0));
        }

        #[test]
        fn kmh_round_trips(v in 0.0_f64..300.0) {
            prop_assert!((in_kmh(kmh(v)) - v).abs() <= 1e-9 * v.max(1.0));
        }
    }
}
