//! Error types for the command-line front end.

use ev_physics::PhysicsError;
use ev_project::ProjectError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Physics(#[from] PhysicsError),

    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
