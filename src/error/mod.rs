//! Error types for the workflow engine.
//!
//! The classify → route → handle path is total and never produces an error.
//! [`WorkflowError`] covers the surfaces around it: graph validation,
//! input/config decoding and diagram rendering.

pub mod workflow_error;

pub use workflow_error::WorkflowError;

/// Convenience alias for workflow-level results.
pub type WorkflowResult<T> = Result<T, WorkflowError>;
