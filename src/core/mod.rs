//! Execution state and the dispatcher that drives it.

pub mod dispatcher;
pub mod execution_context;

pub use dispatcher::WorkflowDispatcher;
pub use execution_context::ExecutionContext;
