use std::fmt;

use serde::{Deserialize, Serialize};

/// Inputs strictly above this value classify as [`Label::High`].
pub const THRESHOLD: i128 = 50;

/// Classification produced by the evaluator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    High,
    Low,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::High, Label::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::High => "high",
            Label::Low => "low",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an input against [`THRESHOLD`]. The threshold itself is `Low`.
pub fn classify(input_value: i128) -> Label {
    if input_value > THRESHOLD {
        Label::High
    } else {
        Label::Low
    }
}
