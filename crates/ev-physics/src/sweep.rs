//! Parametric sweeps over speed or slope.
//!
//! A sweep holds the vehicle, system and constants fixed and varies one axis of
//! the driving conditions. Points are independent, so they are evaluated in
//! parallel; results come back in input order. A failing point (for example a
//! steep downhill with no net consumption) is kept as an error and does not
//! abort the sweep.

use crate::error::{PhysicsError, PhysicsResult};
use crate::pipeline::{EnergyResult, compute_range};
use crate::records::{DrivingConditions, PhysicalConstants, SystemParameters, VehicleSpec};
use ev_core::numeric::Real;
use rayon::prelude::*;
use std::fmt;
use tracing::debug;

/// Driving condition being varied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    /// Road speed in km/h
    Speed,
    /// Road grade in percent
    Slope,
}

impl SweepAxis {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Speed => "km/h",
            Self::Slope => "%",
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speed => write!(f, "speed"),
            Self::Slope => write!(f, "slope"),
        }
    }
}

/// Linearly spaced values of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub axis: SweepAxis,
    pub start: Real,
    pub end: Real,
    pub num_points: usize,
}

impl SweepDefinition {
    pub fn new(axis: SweepAxis, start: Real, end: Real, num_points: usize) -> PhysicsResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PhysicsError::InvalidSweep {
                what: "bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(PhysicsError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(PhysicsError::InvalidSweep {
                what: "start and end values must be different",
            });
        }
        Ok(Self {
            axis,
            start,
            end,
            num_points,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| self.start + i as Real * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points)",
            self.axis,
            self.start,
            self.end,
            self.axis.unit(),
            self.num_points
        )
    }
}

/// Outcome at one swept value.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub value: Real,
    pub outcome: PhysicsResult<EnergyResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub axis: SweepAxis,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn num_successful(&self) -> usize {
        self.points.iter().filter(|p| p.outcome.is_ok()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.points.len() - self.num_successful()
    }

    /// (value, range_km) pairs for points that produced a result.
    pub fn ranges_km(&self) -> Vec<(Real, Real)> {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().ok().map(|r| (p.value, r.range_km)))
            .collect()
    }

    /// The successful point with the longest range.
    pub fn best(&self) -> Option<(Real, &EnergyResult)> {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().ok().map(|r| (p.value, r)))
            .max_by(|a, b| a.1.range_km.total_cmp(&b.1.range_km))
    }
}

/// Evaluate the range model at every point of `sweep`.
///
/// `base` supplies the axis that is not swept.
pub fn execute_sweep(
    sweep: &SweepDefinition,
    vehicle: &VehicleSpec,
    base: &DrivingConditions,
    system: &SystemParameters,
    constants: &PhysicalConstants,
) -> SweepResult {
    debug!(%sweep, "executing sweep");

    let points = sweep
        .generate_points()
        .into_par_iter()
        .map(|value| {
            let conditions = match sweep.axis {
                SweepAxis::Speed => base.with_speed_kmh(value),
                SweepAxis::Slope => base.with_slope_percent(value),
            };
            let outcome = conditions
                .and_then(|conditions| compute_range(vehicle, &conditions, system, constants));
            SweepPoint { value, outcome }
        })
        .collect::<Vec<_>>();

    let result = SweepResult {
        axis: sweep.axis,
        points,
    };
    debug!(
        successful = result.num_successful(),
        failed = result.num_failed(),
        "sweep finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> VehicleSpec {
        VehicleSpec::from_si(1500.0, 0.28, 2.2, 0.010, 50.0).unwrap()
    }

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::new(SweepAxis::Speed, 50.0, 130.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 50.0).abs() < 1e-9);
        assert!((points[2] - 90.0).abs() < 1e-9);
        assert_eq!(points[4], 130.0);
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(matches!(
            SweepDefinition::new(SweepAxis::Speed, 50.0, 100.0, 1),
            Err(PhysicsError::InvalidSweep { .. })
        ));
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(SweepDefinition::new(SweepAxis::Slope, 3.0, 3.0, 4).is_err());
        assert!(SweepDefinition::new(SweepAxis::Slope, f64::NAN, 3.0, 4).is_err());
    }

    #[test]
    fn display_mentions_axis_and_unit() {
        let sweep = SweepDefinition::new(SweepAxis::Slope, -5.0, 5.0, 3).unwrap();
        let text = sweep.to_string();
        assert!(text.contains("slope"));
        assert!(text.contains('%'));
    }

    #[test]
    fn speed_sweep_range_falls_with_speed() {
        let sweep = SweepDefinition::new(SweepAxis::Speed, 40.0, 160.0, 7).unwrap();
        let base = DrivingConditions::from_kmh(100.0, 0.0).unwrap();
        let result = execute_sweep(
            &sweep,
            &compact(),
            &base,
            &SystemParameters::default(),
            &PhysicalConstants::default(),
        );
        assert_eq!(result.num_failed(), 0);
        let ranges = result.ranges_km();
        assert_eq!(ranges.len(), 7);
        for pair in ranges.windows(2) {
            assert!(pair[0].0 < pair[1].0, "points stay in input order");
            assert!(pair[0].1 > pair[1].1, "range falls as speed rises");
        }
        let (best_speed, _) = result.best().unwrap();
        assert_eq!(best_speed, 40.0);
    }

    #[test]
    fn slope_sweep_keeps_failed_points() {
        let sweep = SweepDefinition::new(SweepAxis::Slope, -15.0, 15.0, 7).unwrap();
        let base = DrivingConditions::from_kmh(30.0, 0.0).unwrap();
        let result = execute_sweep(
            &sweep,
            &compact(),
            &base,
            &SystemParameters::default(),
            &PhysicalConstants::default(),
        );
        assert_eq!(result.points.len(), 7);
        assert!(result.num_failed() > 0);
        assert!(matches!(
            result.points[0].outcome,
            Err(PhysicsError::NonPositiveConsumption { .. })
        ));
        assert!(result.points[6].outcome.is_ok());
    }

    #[test]
    fn negative_speed_point_is_an_error_not_a_panic() {
        let sweep = SweepDefinition::new(SweepAxis::Speed, -10.0, 10.0, 3).unwrap();
        let base = DrivingConditions::from_kmh(50.0, 0.0).unwrap();
        let result = execute_sweep(
            &sweep,
            &compact(),
            &base,
            &SystemParameters::default(),
            &PhysicalConstants::default(),
        );
        assert!(matches!(
            result.points[0].outcome,
            Err(PhysicsError::InvalidConditions { .. })
        ));
        assert!(matches!(
            result.points[1].outcome,
            Err(PhysicsError::InvalidSpeed { .. })
        ));
        assert!(result.points[2].outcome.is_ok());
    }
}
