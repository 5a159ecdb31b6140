//! Workflow-level error types.

use thiserror::Error;

/// Workflow-level errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid workflow input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Graph validation error: {0}")]
    GraphValidationError(String),
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Cycle detected in graph")]
    CycleDetected,
    #[error("Graph visualization is not supported")]
    VisualizationUnsupported,
    #[error("Graph render error: {0}")]
    RenderError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for WorkflowError {
    fn from(e: serde_json::Error) -> Self {
        WorkflowError::SerializationError(e.to_string())
    }
}

impl From<std::fmt::Error> for WorkflowError {
    fn from(e: std::fmt::Error) -> Self {
        WorkflowError::RenderError(e.to_string())
    }
}
