use crate::core::execution_context::ExecutionContext;
use crate::evaluator::{classify, Label};
use crate::graph::NodeKind;

pub const HIGH_MESSAGE: &str = "The value is high!";
pub const LOW_MESSAGE: &str = "The value is low.";

/// Outcome of running a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeExecutionResult {
    /// Passed through without touching the context.
    Passed,
    /// Evaluator chose a branch.
    BranchSelected(Label),
    /// A terminal action produced the final message.
    Finished(String),
}

// ================================
// Terminal actions
// ================================

pub fn handle_high() -> String {
    HIGH_MESSAGE.to_string()
}

pub fn handle_low() -> String {
    LOW_MESSAGE.to_string()
}

/// Run `kind` against `ctx`, writing whatever that node produces.
pub fn execute_node(kind: NodeKind, ctx: &mut ExecutionContext) -> NodeExecutionResult {
    match kind {
        NodeKind::Start | NodeKind::End => NodeExecutionResult::Passed,
        NodeKind::Evaluator => {
            let label = classify(ctx.input_value());
            ctx.record_evaluation(label);
            NodeExecutionResult::BranchSelected(label)
        }
        NodeKind::HighHandler => finish(ctx, handle_high()),
        NodeKind::LowHandler => finish(ctx, handle_low()),
    }
}

fn finish(ctx: &mut ExecutionContext, message: String) -> NodeExecutionResult {
    ctx.finish(message.clone());
    NodeExecutionResult::Finished(message)
}
