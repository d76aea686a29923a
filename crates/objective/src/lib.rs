//! Evaluation and lineage layer for derivative-free optimization.
//!
//! An [`Objective`] wraps a user-supplied function, possibly noisy and
//! possibly constrained, and turns candidate points into evaluated,
//! history-tracked [`Solution`]s. Search algorithms drive it; it never
//! searches on its own.
//!
//! # Example
//!
//! ```rust
//! use zeroth_objective::{Objective, Solution, Value};
//!
//! let mut objective = Objective::new(|s: &Solution| Ok(s.point().iter().sum()));
//!
//! let mut first = objective.construct_solution(vec![1.0, 2.0], None);
//! objective.evaluate(&mut first).unwrap();
//!
//! let mut second = objective.construct_solution(vec![0.0, 0.0], Some(&first));
//! objective.evaluate(&mut second).unwrap();
//!
//! assert_eq!(objective.history(), [Value::Scalar(3.0), Value::Scalar(0.0)]);
//! assert_eq!(objective.best(), Some(Value::Scalar(0.0)));
//! ```
//!
//! [`Solution`]: zeroth_core::Solution

mod config;
mod error;
mod objective;
mod report;
mod resample;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use objective::{InheritFn, Objective, PostInheritFn, SolutionFn};
pub use report::Report;
pub use resample::{Resample, ResampleFn};

pub use zeroth_core::{BoxError, Dimension, DimensionError, LogLogger, Logger, Solution, Value};
