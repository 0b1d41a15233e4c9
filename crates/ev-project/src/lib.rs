//! ev-project: scenario file format, input policy and validation.

pub mod limits;
pub mod migrate;
pub mod resolve;
pub mod schema;
pub mod validate;

pub use limits::FieldLimit;
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use resolve::ResolvedScenario;
pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

use std::path::Path;
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Physics error: {0}")]
    Physics(#[from] ev_physics::PhysicsError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unsupported scenario file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let mut scenario: Scenario = serde_yaml::from_str(&content)?;
    scenario = migrate_to_latest(scenario)?;
    validate_scenario(&scenario)?;
    debug!(path = %path.display(), name = %scenario.name, "loaded YAML scenario");
    Ok(scenario)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let mut scenario: Scenario = serde_json::from_str(&content)?;
    scenario = migrate_to_latest(scenario)?;
    validate_scenario(&scenario)?;
    debug!(path = %path.display(), name = %scenario.name, "loaded JSON scenario");
    Ok(scenario)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

enum FileFormat {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> ProjectResult<FileFormat> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load a scenario, picking YAML or JSON from the file extension.
pub fn load_scenario(path: &Path) -> ProjectResult<Scenario> {
    match format_of(path)? {
        FileFormat::Yaml => load_yaml(path),
        FileFormat::Json => load_json(path),
    }
}

/// Save a scenario, picking YAML or JSON from the file extension.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    match format_of(path)? {
        FileFormat::Yaml => save_yaml(path, scenario),
        FileFormat::Json => save_json(path, scenario),
    }
}
