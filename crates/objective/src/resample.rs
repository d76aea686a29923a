use std::fmt;
use std::sync::Arc;

use zeroth_core::{BoxError, Solution};

use crate::{Error, SolutionFn};

/// Custom resample function: returns an averaged value from `repeat` samples.
pub type ResampleFn<A, P> =
    Arc<dyn Fn(&Solution<A, P>, usize) -> Result<f64, BoxError> + Send + Sync>;

/// Strategy used to compute the averaged value of a resample.
pub enum Resample<A = (), P = ()> {
    /// Calls the objective function `repeat` times and takes the arithmetic mean.
    Mean,

    /// Delegates to a user-supplied function.
    Custom(ResampleFn<A, P>),
}

impl<A, P> Resample<A, P> {
    /// Wraps a closure as a custom strategy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Solution<A, P>, usize) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Computes the averaged value for `solution` from `repeat` samples.
    ///
    /// `function` is only needed by [`Resample::Mean`].
    pub(crate) fn sample(
        &self,
        function: Option<&SolutionFn<A, P>>,
        solution: &Solution<A, P>,
        repeat: usize,
    ) -> Result<f64, Error> {
        match self {
            Self::Mean => {
                let function = function.ok_or(Error::UnconfiguredFunction)?;
                let mut total = 0.0;
                for _ in 0..repeat {
                    total += function(solution).map_err(Error::Function)?;
                }
                Ok(total / repeat as f64)
            }
            Self::Custom(f) => f(solution, repeat).map_err(Error::Resample),
        }
    }
}

impl<A, P> Default for Resample<A, P> {
    fn default() -> Self {
        Self::Mean
    }
}

impl<A, P> Clone for Resample<A, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Mean => Self::Mean,
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
        }
    }
}

impl<A, P> fmt::Debug for Resample<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => f.write_str("Mean"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use approx::assert_relative_eq;

    #[test]
    fn mean_calls_function_repeat_times() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        // Yields 1, 2, 3, ... on successive calls.
        let function: SolutionFn<(), ()> = Arc::new(move |_: &Solution| -> Result<f64, BoxError> {
            Ok((counter.fetch_add(1, Ordering::SeqCst) + 1) as f64)
        });

        let solution = Solution::new(vec![0.0]);
        let mean = Resample::Mean
            .sample(Some(&function), &solution, 4)
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_relative_eq!(mean, 2.5);
    }

    #[test]
    fn mean_requires_a_function() {
        let solution: Solution = Solution::new(vec![0.0]);
        let result = Resample::Mean.sample(None, &solution, 3);

        assert!(matches!(result, Err(Error::UnconfiguredFunction)));
    }

    #[test]
    fn custom_strategy_ignores_the_function() {
        let strategy = Resample::custom(|solution: &Solution, repeat| {
            Ok(solution.point()[0] * repeat as f64)
        });

        let solution = Solution::new(vec![1.5]);
        let value = strategy.sample(None, &solution, 2).unwrap();

        assert_relative_eq!(value, 3.0);
    }
}
