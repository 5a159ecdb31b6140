//! # Branchflow — a threshold-routed workflow graph
//!
//! `branchflow` runs a small directed workflow with one conditional branch:
//!
//! ```text
//! Start → Evaluator → { HighHandler | LowHandler } → End
//! ```
//!
//! The evaluator classifies an integer against a fixed threshold of 50
//! (strictly greater is `high`), and the matching terminal action writes the
//! final message. Nodes and transitions form a closed enum with a static
//! table, so an invocation cannot fail. The only fallible surface is the
//! optional diagram rendering, which degrades to a fixed notice.
//!
//! # Quick Start
//!
//! ```rust
//! use branchflow::{Label, WorkflowRunner};
//!
//! let runner = WorkflowRunner::new().unwrap();
//! let out = runner.invoke_value(75);
//! assert_eq!(out.evaluation_result, Some(Label::High));
//! assert_eq!(out.final_message.as_deref(), Some("The value is high!"));
//! println!("{}", runner.draw());
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod nodes;

pub use crate::api::{
    RunnerConfig, VisualizationConfig, WorkflowInput, WorkflowOutput, WorkflowRunner,
    WorkflowRunnerBuilder,
};
pub use crate::core::{ExecutionContext, WorkflowDispatcher};
pub use crate::error::{WorkflowError, WorkflowResult};
pub use crate::evaluator::{classify, route, Label, THRESHOLD};
pub use crate::graph::{
    build_graph, render_or_fallback, DiagramFormat, NodeKind, RenderCapability,
    WorkflowDefinition, FALLBACK_NOTICE,
};
pub use crate::nodes::{handle_high, handle_low};
