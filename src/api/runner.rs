//! High-level workflow runner and builder.
//!
//! [`WorkflowRunner`] compiles the fixed graph once, validates it, and then
//! serves any number of independent invocations.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::core::{ExecutionContext, WorkflowDispatcher};
use crate::error::{WorkflowError, WorkflowResult};
use crate::evaluator::Label;
use crate::graph::{
    build_graph, render_or_fallback, validate_graph, DiagramFormat, NodeKind, RenderCapability,
    WorkflowDefinition,
};

/// Input accepted by [`WorkflowRunner::invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInput {
    pub input_value: i128,
}

/// Wire form of [`WorkflowInput`]. JSON integers beyond `i64` arrive as `u64`.
#[derive(Debug, Deserialize)]
struct JsonInput {
    input_value: Number,
}

impl TryFrom<JsonInput> for WorkflowInput {
    type Error = WorkflowError;

    fn try_from(raw: JsonInput) -> Result<Self, Self::Error> {
        let input_value = raw
            .input_value
            .as_i64()
            .map(i128::from)
            .or_else(|| raw.input_value.as_u64().map(i128::from))
            .ok_or_else(|| {
                WorkflowError::InvalidInput(format!(
                    "input_value must be an integer, got {}",
                    raw.input_value
                ))
            })?;
        Ok(WorkflowInput { input_value })
    }
}

/// Fields accumulated along the executed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowOutput {
    pub input_value: i128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_result: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_message: Option<String>,
    /// Nodes visited, in order.
    #[serde(skip)]
    pub path: Vec<NodeKind>,
}

impl WorkflowOutput {
    fn from_context(ctx: ExecutionContext, path: Vec<NodeKind>) -> Self {
        WorkflowOutput {
            input_value: ctx.input_value(),
            evaluation_result: ctx.evaluation_result(),
            final_message: ctx.final_message().map(str::to_string),
            path,
        }
    }

    /// JSON view of the accumulated state, without the path.
    ///
    /// Fails when `input_value` is outside the range JSON numbers can carry
    /// (`i64::MIN..=u64::MAX`).
    pub fn to_value(&self) -> WorkflowResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Workflow runner with builder-based configuration.
///
/// Use [`WorkflowRunner::builder()`](Self::builder) to obtain a
/// [`WorkflowRunnerBuilder`], or [`WorkflowRunner::new`] for the defaults.
#[derive(Debug)]
pub struct WorkflowRunner {
    definition: WorkflowDefinition,
    dispatcher: WorkflowDispatcher,
    render_capability: RenderCapability,
}

impl WorkflowRunner {
    pub fn builder() -> WorkflowRunnerBuilder {
        WorkflowRunnerBuilder::default()
    }

    pub fn new() -> WorkflowResult<Self> {
        Self::builder().build()
    }

    pub fn definition(&self) -> &WorkflowDefinition {
        &self.definition
    }

    pub fn render_capability(&self) -> RenderCapability {
        self.render_capability
    }

    /// Run the workflow once. Each call gets its own [`ExecutionContext`].
    pub fn invoke(&self, input: WorkflowInput) -> WorkflowOutput {
        let mut ctx = ExecutionContext::new(input.input_value);
        let path = self.dispatcher.run(&mut ctx);

        tracing::info!(
            input_value = %input.input_value,
            evaluation_result = ?ctx.evaluation_result(),
            steps = path.len(),
            "workflow completed"
        );

        WorkflowOutput::from_context(ctx, path)
    }

    pub fn invoke_value(&self, input_value: i128) -> WorkflowOutput {
        self.invoke(WorkflowInput { input_value })
    }

    /// Run the workflow from a JSON object such as `{"input_value": 75}`.
    pub fn invoke_json(&self, input: &Value) -> WorkflowResult<WorkflowOutput> {
        let raw: JsonInput = serde_json::from_value(input.clone())
            .map_err(|e| WorkflowError::InvalidInput(e.to_string()))?;
        Ok(self.invoke(WorkflowInput::try_from(raw)?))
    }

    /// Render the graph with the configured capability, falling back to a notice.
    pub fn draw(&self) -> String {
        render_or_fallback(&self.definition, self.render_capability)
    }
}

/// Builder for [`WorkflowRunner`].
#[derive(Debug, Clone)]
pub struct WorkflowRunnerBuilder {
    render_capability: RenderCapability,
}

impl Default for WorkflowRunnerBuilder {
    fn default() -> Self {
        WorkflowRunnerBuilder {
            render_capability: RenderCapability::Supported(DiagramFormat::Mermaid),
        }
    }
}

impl WorkflowRunnerBuilder {
    pub fn render_capability(mut self, capability: RenderCapability) -> Self {
        self.render_capability = capability;
        self
    }

    /// Compile and validate the graph.
    pub fn build(self) -> WorkflowResult<WorkflowRunner> {
        let definition = build_graph();
        validate_graph(&definition)?;
        tracing::debug!(
            nodes = definition.graph.node_count(),
            edges = definition.graph.edge_count(),
            "workflow graph compiled"
        );

        Ok(WorkflowRunner {
            definition,
            dispatcher: WorkflowDispatcher::new(),
            render_capability: self.render_capability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoke_high() {
        let runner = WorkflowRunner::new().unwrap();
        let out = runner.invoke(WorkflowInput { input_value: 75 });
        assert_eq!(out.evaluation_result, Some(Label::High));
        assert_eq!(out.final_message.as_deref(), Some("The value is high!"));
    }

    #[test]
    fn test_invoke_json() {
        let runner = WorkflowRunner::new().unwrap();
        let out = runner.invoke_json(&json!({"input_value": 25})).unwrap();
        assert_eq!(
            out.to_value().unwrap(),
            json!({
                "input_value": 25,
                "evaluation_result": "low",
                "final_message": "The value is low."
            })
        );
    }

    #[test]
    fn test_invoke_json_rejects_bad_input() {
        let runner = WorkflowRunner::new().unwrap();
        for bad in [
            json!({}),
            json!({"input_value": "75"}),
            json!({"input_value": 75.5}),
            json!(75),
        ] {
            let err = runner.invoke_json(&bad).unwrap_err();
            assert!(matches!(err, WorkflowError::InvalidInput(_)), "{bad}");
        }
    }

    #[test]
    fn test_invoke_json_accepts_integers_beyond_i64() {
        let runner = WorkflowRunner::new().unwrap();
        let out = runner
            .invoke_json(&json!({"input_value": (i64::MAX as u64) + 1}))
            .unwrap();
        assert_eq!(out.input_value, i64::MAX as i128 + 1);
        assert_eq!(out.evaluation_result, Some(Label::High));

        let out = runner.invoke_json(&json!({"input_value": i64::MIN})).unwrap();
        assert_eq!(out.evaluation_result, Some(Label::Low));
    }

    #[test]
    fn test_to_value_rejects_out_of_range_input() {
        let runner = WorkflowRunner::new().unwrap();
        let out = runner.invoke_value(i128::MAX);
        assert_eq!(out.evaluation_result, Some(Label::High));
        assert!(matches!(
            out.to_value(),
            Err(WorkflowError::SerializationError(_))
        ));
    }

    #[test]
    fn test_draw_uses_capability() {
        let runner = WorkflowRunner::builder()
            .render_capability(RenderCapability::Unavailable)
            .build()
            .unwrap();
        assert_eq!(runner.draw(), crate::graph::FALLBACK_NOTICE);

        let runner = WorkflowRunner::new().unwrap();
        assert!(runner.draw().contains("graph TD;"));
    }

    #[test]
    fn test_runner_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WorkflowRunner>();
    }
}
