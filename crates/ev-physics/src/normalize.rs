//! Conversions from user-facing units into the SI values the stages expect.

use ev_core::numeric::Real;

const KMH_PER_MPS: Real = 3.6;
const WATTS_PER_KILOWATT: Real = 1000.0;

pub fn to_meters_per_second(speed_kmh: Real) -> Real {
    speed_kmh / KMH_PER_MPS
}

pub fn to_kmh(speed_ms: Real) -> Real {
    speed_ms * KMH_PER_MPS
}

/// Road grade (rise over run, percent) to inclination angle.
///
/// A 100 % grade is 45°, not 90°: grade is `tan(angle)`.
pub fn to_radians(slope_percent: Real) -> Real {
    (slope_percent / 100.0).atan()
}

pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees.to_radians()
}

pub fn watts_to_kilowatts(power_w: Real) -> Real {
    power_w / WATTS_PER_KILOWATT
}
