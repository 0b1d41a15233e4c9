//! ev-physics: steady-state road-load model for electric vehicle range.
//!
//! The pipeline is a chain of stateless stages:
//! - `normalize`: km/h and slope percent into SI speed and road angle
//! - `forces`: rolling, aerodynamic drag and gradient resistance
//! - `power`: wheel power and battery-side power through the drivetrain
//! - `energy`: battery energy consumed per kilometer
//! - `range`: usable battery energy and the resulting range
//!
//! `compute_range` composes them and is the only entry point most callers need.
//! Every stage is a pure function of its inputs, so sweeps can evaluate many
//! operating points in parallel.
//!
//! # Example
//!
//! ```
//! use ev_physics::{
//!     DrivingConditions, PhysicalConstants, SystemParameters, VehicleCatalog, compute_range,
//! };
//!
//! let catalog = VehicleCatalog::builtin().unwrap();
//! let leaf = catalog.get("compact").unwrap();
//! let conditions = DrivingConditions::from_kmh(100.0, 0.0).unwrap();
//! let system = SystemParameters::default();
//!
//! let result = compute_range(&leaf.spec, &conditions, &system, &PhysicalConstants::default())
//!     .unwrap();
//! println!("Range: {:.1} km", result.range_km);
//! ```

pub mod common;
pub mod energy;
pub mod error;
pub mod forces;
pub mod normalize;
pub mod pipeline;
pub mod power;
pub mod presets;
pub mod range;
pub mod records;
pub mod sweep;

// Re-exports
pub use error::{PhysicsError, PhysicsResult};
pub use forces::ForceBreakdown;
pub use pipeline::{EnergyResult, compute_range};
pub use presets::{VehicleCatalog, VehicleProfile};
pub use records::{DrivingConditions, PhysicalConstants, SystemParameters, VehicleSpec};
pub use sweep::{SweepAxis, SweepDefinition, SweepPoint, SweepResult, execute_sweep};
