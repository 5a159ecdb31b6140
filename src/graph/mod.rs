//! Graph construction and representation.
//!
//! The [`WorkflowDefinition`] is built from the static [`TRANSITIONS`] table by
//! [`build_graph`]. Execution walks the same table through [`next_node`]; the
//! petgraph view exists for validation, queries and rendering.

pub mod builder;
pub mod render;
pub mod traversal;
pub mod types;
pub mod validator;

pub use builder::*;
pub use render::{render_or_fallback, DiagramFormat, RenderCapability, FALLBACK_NOTICE};
pub use traversal::topological_sort;
pub use types::*;
pub use validator::validate_graph;
