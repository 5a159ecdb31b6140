//! Node behaviour for the fixed workflow.
//!
//! Nodes are dispatched by [`NodeKind`](crate::graph::NodeKind) through
//! [`execute_node`]; there is no string-keyed registry.

pub mod control_flow;

pub use control_flow::{
    execute_node, handle_high, handle_low, NodeExecutionResult, HIGH_MESSAGE, LOW_MESSAGE,
};
