//! Core types for the Zeroth derivative-free optimization layer.
//!
//! This crate defines the records and seams that the objective layer and the
//! search algorithms driving it share:
//!
//! - [`Solution`] — a candidate point with its value and lineage payloads
//! - [`Value`] — a recorded evaluation result, plain or constrained
//! - [`Dimension`] — the bounds descriptor of the search space
//! - [`Logger`] — receives formatted status lines during evaluation

mod dimension;
mod logger;
mod solution;
mod value;

pub use dimension::{Dimension, DimensionError};
pub use logger::{LogLogger, Logger};
pub use solution::Solution;
pub use value::Value;

/// Boxed error returned by user-supplied functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
