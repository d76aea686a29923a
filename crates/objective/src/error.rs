use thiserror::Error;

use zeroth_core::BoxError;

use crate::ConfigError;

/// Errors that can occur when evaluating or resampling a solution.
///
/// Failures raised by user functions are carried unmodified as the error
/// source. A failed call leaves the history and the solution untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Evaluation was requested before an objective function was set.
    #[error("objective function is not configured")]
    UnconfiguredFunction,

    /// Constrained evaluation was requested before a constraint function was set.
    #[error("constraint function is not configured")]
    UnconfiguredConstraint,

    /// Resampling was requested on a solution that has no value yet.
    #[error("solution must be evaluated before it can be resampled")]
    NotEvaluated,

    /// A configuration value or call argument was out of range.
    #[error("invalid configuration")]
    InvalidConfiguration(#[from] ConfigError),

    /// The objective function failed.
    #[error("objective function failed")]
    Function(#[source] BoxError),

    /// The constraint function failed.
    #[error("constraint function failed")]
    Constraint(#[source] BoxError),

    /// A custom resample function failed.
    #[error("resample function failed")]
    Resample(#[source] BoxError),
}
