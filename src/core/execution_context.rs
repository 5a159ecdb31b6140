use serde::Serialize;

use crate::evaluator::Label;

/// Per-invocation state, created fresh for every run and dropped afterwards.
///
/// `evaluation_result` is set only by the evaluator node and `final_message`
/// only by a terminal action, so both stay `None` until their node has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionContext {
    input_value: i128,

    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation_result: Option<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    final_message: Option<String>,
}

impl ExecutionContext {
    pub fn new(input_value: i128) -> Self {
        ExecutionContext {
            input_value,
            evaluation_result: None,
            final_message: None,
        }
    }

    pub fn input_value(&self) -> i128 {
        self.input_value
    }

    pub fn evaluation_result(&self) -> Option<Label> {
        self.evaluation_result
    }

    pub fn final_message(&self) -> Option<&str> {
        self.final_message.as_deref()
    }

    pub(crate) fn record_evaluation(&mut self, label: Label) {
        self.evaluation_result = Some(label);
    }

    pub(crate) fn finish(&mut self, message: String) {
        assert!(
            self.final_message.is_none(),
            "a terminal action already ran for this execution"
        );
        self.final_message = Some(message);
    }
}
