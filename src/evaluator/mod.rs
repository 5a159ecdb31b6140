//! Classification and routing for the evaluator node.
//!
//! [`classify`] turns the input into a [`Label`]; [`route`] picks the terminal
//! action for that label.

pub mod condition;
pub mod router;

pub use condition::{classify, Label, THRESHOLD};
pub use router::route;
