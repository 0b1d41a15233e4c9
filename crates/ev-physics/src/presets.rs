//! Built-in vehicle profiles.
//!
//! The catalog is plain data: callers build it once at startup and pass it by
//! reference. The pipeline never special-cases a preset.

use crate::error::PhysicsResult;
use crate::records::VehicleSpec;

struct PresetRow {
    key: &'static str,
    name: &'static str,
    mass_kg: f64,
    drag_coefficient: f64,
    frontal_area_m2: f64,
    rolling_resistance_coeff: f64,
    battery_capacity_kwh: f64,
}

const BUILTIN: &[PresetRow] = &[
    PresetRow {
        key: "compact",
        name: "Nissan Leaf",
        mass_kg: 1500.0,
        drag_coefficient: 0.28,
        frontal_area_m2: 2.2,
        rolling_resistance_coeff: 0.010,
        battery_capacity_kwh: 50.0,
    },
    PresetRow {
        key: "suv",
        name: "Volvo EX90",
        mass_kg: 2200.0,
        drag_coefficient: 0.32,
        frontal_area_m2: 2.8,
        rolling_resistance_coeff: 0.012,
        battery_capacity_kwh: 80.0,
    },
    PresetRow {
        key: "sports",
        name: "Tesla Roadster",
        mass_kg: 1800.0,
        drag_coefficient: 0.24,
        frontal_area_m2: 2.0,
        rolling_resistance_coeff: 0.009,
        battery_capacity_kwh: 75.0,
    },
];

/// A named vehicle in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleProfile {
    /// Short lookup key (`compact`, `suv`, `sports`)
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub spec: VehicleSpec,
}

/// Read-only collection of vehicle profiles, in display order.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    profiles: Vec<VehicleProfile>,
}

impl VehicleCatalog {
    /// The three reference vehicles shipped with the estimator.
    pub fn builtin() -> PhysicsResult<Self> {
        let profiles = BUILTIN
            .iter()
            .map(|row| -> PhysicsResult<VehicleProfile> {
                Ok(VehicleProfile {
                    key: row.key,
                    name: row.name,
                    spec: VehicleSpec::from_si(
                        row.mass_kg,
                        row.drag_coefficient,
                        row.frontal_area_m2,
                        row.rolling_resistance_coeff,
                        row.battery_capacity_kwh,
                    )?,
                })
            })
            .collect::<PhysicsResult<Vec<_>>>()?;
        Ok(Self { profiles })
    }

    /// Look up by key or display name, ignoring case.
    pub fn get(&self, key_or_name: &str) -> Option<&VehicleProfile> {
        let needle = key_or_name.trim();
        self.profiles
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(needle) || p.name.eq_ignore_ascii_case(needle))
    }

    /// Look up by 1-based menu position.
    pub fn by_index(&self, one_based: usize) -> Option<&VehicleProfile> {
        one_based
            .checked_sub(1)
            .and_then(|idx| self.profiles.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleProfile> {
        self.profiles.iter()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.key).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Keys of the built-in profiles, without building the catalog.
    pub fn builtin_keys() -> Vec<&'static str> {
        BUILTIN.iter().map(|row| row.key).collect()
    }

    /// Whether `key_or_name` names a built-in profile, with the same matching as `get`.
    pub fn is_builtin(key_or_name: &str) -> bool {
        let needle = key_or_name.trim();
        BUILTIN.iter().any(|row| {
            row.key.eq_ignore_ascii_case(needle) || row.name.eq_ignore_ascii_case(needle)
        })
    }
}
