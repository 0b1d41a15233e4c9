//! Immutable input records for a range calculation.
//!
//! Each record validates on construction and again in `validate`, which the
//! pipeline calls before doing any arithmetic. Fields are private so a record
//! that exists has already passed its checks.

use crate::common::{check_constant, check_efficiency, check_spec, check_usable_fraction};
use crate::error::{PhysicsError, PhysicsResult};
use ev_core::numeric::Real;
use ev_core::units::{
    Accel, Area, Density, Energy, Mass, Velocity, constants, in_kmh, in_kwh, kg, kg_per_m3, kmh,
    kwh, m2, mps2,
};

/// Physical description of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSpec {
    mass: Mass,
    drag_coefficient: Real,
    frontal_area: Area,
    rolling_resistance_coeff: Real,
    battery_capacity: Energy,
}

impl VehicleSpec {
    pub fn new(
        mass: Mass,
        drag_coefficient: Real,
        frontal_area: Area,
        rolling_resistance_coeff: Real,
        battery_capacity: Energy,
    ) -> PhysicsResult<Self> {
        let spec = Self {
            mass,
            drag_coefficient,
            frontal_area,
            rolling_resistance_coeff,
            battery_capacity,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Build from plain numbers in kg, dimensionless, m², dimensionless and kWh.
    pub fn from_si(
        mass_kg: Real,
        drag_coefficient: Real,
        frontal_area_m2: Real,
        rolling_resistance_coeff: Real,
        battery_capacity_kwh: Real,
    ) -> PhysicsResult<Self> {
        Self::new(
            kg(mass_kg),
            drag_coefficient,
            m2(frontal_area_m2),
            rolling_resistance_coeff,
            kwh(battery_capacity_kwh),
        )
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        check_spec(self.mass_kg(), "mass_kg")?;
        check_spec(self.drag_coefficient, "drag_coefficient")?;
        check_spec(self.frontal_area_m2(), "frontal_area_m2")?;
        check_spec(self.rolling_resistance_coeff, "rolling_resistance_coeff")?;
        check_spec(self.battery_capacity_kwh(), "battery_capacity_kwh")?;
        Ok(())
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn mass_kg(&self) -> Real {
        self.mass.value
    }

    pub fn drag_coefficient(&self) -> Real {
        self.drag_coefficient
    }

    pub fn frontal_area(&self) -> Area {
        self.frontal_area
    }

    pub fn frontal_area_m2(&self) -> Real {
        self.frontal_area.value
    }

    pub fn rolling_resistance_coeff(&self) -> Real {
        self.rolling_resistance_coeff
    }

    pub fn battery_capacity(&self) -> Energy {
        self.battery_capacity
    }

    pub fn battery_capacity_kwh(&self) -> Real {
        in_kwh(self.battery_capacity)
    }
}

/// Operating point: road speed and grade.
///
/// Zero speed is representable; the energy stage rejects it because no
/// distance is covered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivingConditions {
    speed: Velocity,
    slope_percent: Real,
}

impl DrivingConditions {
    pub fn new(speed: Velocity, slope_percent: Real) -> PhysicsResult<Self> {
        let conditions = Self {
            speed,
            slope_percent,
        };
        conditions.validate()?;
        Ok(conditions)
    }

    pub fn from_kmh(speed_kmh: Real, slope_percent: Real) -> PhysicsResult<Self> {
        Self::new(kmh(speed_kmh), slope_percent)
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        let speed_kmh = self.speed_kmh();
        if !speed_kmh.is_finite() || speed_kmh < 0.0 {
            return Err(PhysicsError::InvalidConditions {
                what: "speed_kmh",
                value: speed_kmh,
            });
        }
        if !self.slope_percent.is_finite() {
            return Err(PhysicsError::InvalidConditions {
                what: "slope_percent",
                value: self.slope_percent,
            });
        }
        Ok(())
    }

    pub fn speed(&self) -> Velocity {
        self.speed
    }

    pub fn speed_kmh(&self) -> Real {
        in_kmh(self.speed)
    }

    /// Grade as rise over run in percent; positive is uphill.
    pub fn slope_percent(&self) -> Real {
        self.slope_percent
    }

    /// Same grade, different speed.
    pub fn with_speed_kmh(&self, speed_kmh: Real) -> PhysicsResult<Self> {
        Self::from_kmh(speed_kmh, self.slope_percent)
    }

    /// Same speed, different grade.
    pub fn with_slope_percent(&self, slope_percent: Real) -> PhysicsResult<Self> {
        Self::new(self.speed, slope_percent)
    }
}

/// Drivetrain and battery usage settings, both as fractions in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    drivetrain_efficiency: Real,
    battery_usable_fraction: Real,
}

impl SystemParameters {
    pub const DEFAULT_DRIVETRAIN_EFFICIENCY: Real = 0.88;
    pub const DEFAULT_BATTERY_USABLE_FRACTION: Real = 0.90;

    pub fn new(drivetrain_efficiency: Real, battery_usable_fraction: Real) -> PhysicsResult<Self> {
        let system = Self {
            drivetrain_efficiency,
            battery_usable_fraction,
        };
        system.validate()?;
        Ok(system)
    }

    /// Build from percentages, e.g. `88.0` and `90.0`.
    pub fn from_percent(efficiency_percent: Real, usable_percent: Real) -> PhysicsResult<Self> {
        Self::new(efficiency_percent / 100.0, usable_percent / 100.0)
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        check_efficiency(self.drivetrain_efficiency)?;
        check_usable_fraction(self.battery_usable_fraction)?;
        Ok(())
    }

    pub fn drivetrain_efficiency(&self) -> Real {
        self.drivetrain_efficiency
    }

    pub fn battery_usable_fraction(&self) -> Real {
        self.battery_usable_fraction
    }
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            drivetrain_efficiency: Self::DEFAULT_DRIVETRAIN_EFFICIENCY,
            battery_usable_fraction: Self::DEFAULT_BATTERY_USABLE_FRACTION,
        }
    }
}

/// Environment constants, read-only for the whole process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    gravity: Accel,
    air_density: Density,
}

impl PhysicalConstants {
    pub fn new(gravity: Accel, air_density: Density) -> PhysicsResult<Self> {
        let constants = Self {
            gravity,
            air_density,
        };
        constants.validate()?;
        Ok(constants)
    }

    pub fn from_si(gravity_m_s2: Real, air_density_kg_m3: Real) -> PhysicsResult<Self> {
        Self::new(mps2(gravity_m_s2), kg_per_m3(air_density_kg_m3))
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        check_constant(self.gravity_m_s2(), "gravity_m_s2")?;
        check_constant(self.air_density_kg_m3(), "air_density_kg_m3")?;
        Ok(())
    }

    pub fn gravity_m_s2(&self) -> Real {
        self.gravity.value
    }

    pub fn air_density_kg_m3(&self) -> Real {
        self.air_density.value
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity: constants::gravity(),
            air_density: constants::air_density(),
        }
    }
}
