//! Error types for the grid-app layer.

use std::path::PathBuf;

/// Application error type wrapping errors from the backend crates.
///
/// Grid mutation and queries never fail; these arise from configuration,
/// scenario files, and report serialization.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] grid_core::CoreError),

    #[error("Graph error: {0}")]
    Graph(#[from] grid_graph::GraphError),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to load scenario file: {path}: {message}")]
    ScenarioFile { path: PathBuf, message: String },

    #[error("Unknown {kind} in scenario: {name}")]
    UnknownEntity { kind: &'static str, name: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for grid-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<grid_scenario::ScenarioError> for AppError {
    fn from(err: grid_scenario::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<grid_scenario::ValidationError> for AppError {
    fn from(err: grid_scenario::ValidationError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
