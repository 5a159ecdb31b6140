use serde::Deserialize;

use crate::error::{WorkflowError, WorkflowResult};
use crate::graph::{DiagramFormat, RenderCapability};

use super::runner::WorkflowRunnerBuilder;

/// Settings for the demo binary. The classification threshold is not one of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Inputs to invoke, in order.
    pub inputs: Vec<i128>,
    pub visualization: VisualizationConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            inputs: vec![75, 25],
            visualization: VisualizationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizationConfig {
    pub enabled: bool,
    pub format: DiagramFormat,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        VisualizationConfig {
            enabled: true,
            format: DiagramFormat::Mermaid,
        }
    }
}

impl RunnerConfig {
    /// Parse config text supplied by an embedding caller.
    pub fn from_json(content: &str) -> WorkflowResult<Self> {
        serde_json::from_str(content).map_err(|e| WorkflowError::ConfigError(e.to_string()))
    }

    pub fn render_capability(&self) -> RenderCapability {
        if self.visualization.enabled {
            RenderCapability::Supported(self.visualization.format)
        } else {
            RenderCapability::Unavailable
        }
    }

    /// A runner builder carrying this config's render capability.
    pub fn runner_builder(&self) -> WorkflowRunnerBuilder {
        WorkflowRunnerBuilder::default().render_capability(self.render_capability())
    }
}
