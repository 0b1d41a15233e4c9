//! ev-core: stable foundation for evrange.
//!
//! Contains:
//! - units (uom SI types, constructors and reference constants)
//! - numeric (Real + tolerances + float checks)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
