use ev_project::schema::*;
use ev_project::{
    ProjectError, load_json, load_scenario, load_yaml, save_json, save_scenario, save_yaml,
    validate_scenario,
};

fn preset_scenario() -> Scenario {
    Scenario {
        version: 1,
        name: "Highway cruise".to_string(),
        vehicle: VehicleDef::Preset {
            preset: "compact".to_string(),
        },
        conditions: ConditionsDef {
            speed_kmh: 100.0,
            slope_percent: 0.0,
        },
        system: SystemDef::default(),
        constants: None,
    }
}

fn custom_scenario() -> Scenario {
    Scenario {
        version: 1,
        name: "Mountain pass".to_string(),
        vehicle: VehicleDef::Custom(CustomVehicleDef {
            name: Some("Delivery van".to_string()),
            battery_capacity_kwh: 110.0,
            mass_kg: 2900.0,
            drag_coefficient: 0.36,
            frontal_area_m2: 3.6,
            rolling_resistance_coeff: 0.013,
        }),
        conditions: ConditionsDef {
            speed_kmh: 70.0,
            slope_percent: 6.0,
        },
        system: SystemDef {
            drivetrain_efficiency_percent: 85.0,
            battery_usable_percent: 92.0,
        },
        constants: Some(ConstantsDef {
            gravity_m_s2: 9.81,
            air_density_kg_m3: 1.05,
        }),
    }
}

#[test]
fn roundtrip_yaml_preset_scenario() {
    let scenario = preset_scenario();
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("ev_project_roundtrip_preset.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_custom_scenario() {
    let scenario = custom_scenario();

    let path = std::env::temp_dir().join("ev_project_roundtrip_custom.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_by_extension() {
    let scenario = custom_scenario();
    for name in [
        "ev_project_roundtrip_ext.yml",
        "ev_project_roundtrip_ext.json",
    ] {
        let path = std::env::temp_dir().join(name);
        save_scenario(&path, &scenario).unwrap();
        assert_eq!(load_scenario(&path).unwrap(), scenario);
    }
}

#[test]
fn unknown_extension_rejected() {
    let path = std::env::temp_dir().join("ev_project_scenario.toml");
    let err = save_scenario(&path, &preset_scenario()).unwrap_err();
    assert!(matches!(err, ProjectError::UnsupportedFormat { .. }));
}

#[test]
fn out_of_range_scenario_is_not_saved() {
    let mut scenario = preset_scenario();
    scenario.conditions.speed_kmh = 320.0;
    let path = std::env::temp_dir().join("ev_project_rejected.yaml");
    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn unknown_preset_is_not_saved() {
    let mut scenario = preset_scenario();
    scenario.vehicle = VehicleDef::Preset {
        preset: "minivan".to_string(),
    };
    for name in ["ev_project_minivan.yaml", "ev_project_minivan.json"] {
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);
        let err = save_scenario(&path, &scenario).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::Validation(ev_project::ValidationError::UnknownPreset { .. })
        ));
        assert!(!path.exists());
    }
}
