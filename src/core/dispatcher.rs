use crate::graph::{next_node, NodeKind};
use crate::nodes::{execute_node, NodeExecutionResult};

use super::execution_context::ExecutionContext;

/// Walks the state machine from `Start` to `End`, one node at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowDispatcher;

impl WorkflowDispatcher {
    pub fn new() -> Self {
        WorkflowDispatcher
    }

    /// Run every node on the selected path and return that path in order.
    pub fn run(&self, ctx: &mut ExecutionContext) -> Vec<NodeKind> {
        let mut path = Vec::with_capacity(4);
        let mut current = Some(NodeKind::Start);

        while let Some(kind) = current {
            let result = execute_node(kind, ctx);
            tracing::debug!(node_id = %kind, result = ?result, "node executed");
            path.push(kind);

            let label = match result {
                NodeExecutionResult::BranchSelected(label) => Some(label),
                _ => None,
            };
            current = next_node(kind, label);
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Label;

    #[test]
    fn test_high_path() {
        let mut ctx = ExecutionContext::new(75);
        let path = WorkflowDispatcher::new().run(&mut ctx);
        assert_eq!(
            path,
            vec![
                NodeKind::Start,
                NodeKind::Evaluator,
                NodeKind::HighHandler,
                NodeKind::End
            ]
        );
        assert_eq!(ctx.evaluation_result(), Some(Label::High));
        assert_eq!(ctx.final_message(), Some("The value is high!"));
    }

    #[test]
    fn test_low_path() {
        let mut ctx = ExecutionContext::new(25);
        let path = WorkflowDispatcher::new().run(&mut ctx);
        assert_eq!(
            path,
            vec![
                NodeKind::Start,
                NodeKind::Evaluator,
                NodeKind::LowHandler,
                NodeKind::End
            ]
        );
        assert_eq!(ctx.evaluation_result(), Some(Label::Low));
        assert_eq!(ctx.final_message(), Some("The value is low."));
    }

    #[test]
    fn test_exactly_one_terminal_action_runs() {
        for input in [-100, 0, 50, 51, 1000] {
            let mut ctx = ExecutionContext::new(input);
            let path = WorkflowDispatcher::new().run(&mut ctx);
            let terminal = path.iter().filter(|k| k.is_terminal_action()).count();
            assert_eq!(terminal, 1, "input {input}");
        }
    }
}
