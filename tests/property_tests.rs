//! Property-based checks over the whole input range.

use branchflow::{classify, route, Label, NodeKind, WorkflowRunner, THRESHOLD};
use proptest::prelude::*;

proptest! {
    #[test]
    fn above_threshold_is_high(v in (THRESHOLD + 1)..=i128::MAX) {
        prop_assert_eq!(classify(v), Label::High);

        let out = WorkflowRunner::new().unwrap().invoke_value(v);
        prop_assert_eq!(out.evaluation_result, Some(Label::High));
        prop_assert_eq!(out.final_message.as_deref(), Some("The value is high!"));
    }

    #[test]
    fn at_or_below_threshold_is_low(v in i128::MIN..=THRESHOLD) {
        prop_assert_eq!(classify(v), Label::Low);

        let out = WorkflowRunner::new().unwrap().invoke_value(v);
        prop_assert_eq!(out.evaluation_result, Some(Label::Low));
        prop_assert_eq!(out.final_message.as_deref(), Some("The value is low."));
    }

    #[test]
    fn invocation_is_idempotent(v in any::<i128>()) {
        let runner = WorkflowRunner::new().unwrap();
        prop_assert_eq!(runner.invoke_value(v), runner.invoke_value(v));
    }

    #[test]
    fn path_runs_exactly_one_terminal_action(v in any::<i128>()) {
        let out = WorkflowRunner::new().unwrap().invoke_value(v);
        prop_assert_eq!(out.path.len(), 4);
        prop_assert_eq!(out.path[0], NodeKind::Start);
        prop_assert_eq!(out.path[1], NodeKind::Evaluator);
        prop_assert_eq!(out.path[2], route(classify(v)));
        prop_assert_eq!(out.path[3], NodeKind::End);
    }
}
