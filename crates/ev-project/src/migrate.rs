//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ProjectError> {
    match scenario.version {
        0 => migrate_v0_to_v1(scenario),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 stored efficiencies as fractions (0.88); version 1 uses percent.
fn migrate_v0_to_v1(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    let system = &mut scenario.system;
    if system.drivetrain_efficiency_percent <= 1.0 {
        system.drivetrain_efficiency_percent *= 100.0;
    }
    if system.battery_usable_percent <= 1.0 {
        system.battery_usable_percent *= 100.0;
    }
    scenario.version = 1;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConditionsDef, SystemDef, VehicleDef};

    #[test]
    fn v0_fractions_become_percent() {
        let scenario = Scenario {
            version: 0,
            name: "legacy".to_string(),
            vehicle: VehicleDef::Preset {
                preset: "compact".to_string(),
            },
            conditions: ConditionsDef {
                speed_kmh: 90.0,
                slope_percent: 0.0,
            },
            system: SystemDef {
                drivetrain_efficiency_percent: 0.85,
                battery_usable_percent: 0.95,
            },
            constants: None,
        };

        let migrated = migrate_to_latest(scenario).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert!((migrated.system.drivetrain_efficiency_percent - 85.0).abs() < 1e-9);
        assert!((migrated.system.battery_usable_percent - 95.0).abs() < 1e-9);
    }
}
