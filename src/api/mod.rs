//! Public API layer — stable entry points for external consumers.

mod config;
mod runner;

pub use config::{RunnerConfig, VisualizationConfig};
pub use runner::{WorkflowInput, WorkflowOutput, WorkflowRunner, WorkflowRunnerBuilder};
