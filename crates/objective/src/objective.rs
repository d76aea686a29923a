//! The objective: wraps a user function and owns the evaluation history.
//!
//! An [`Objective`] sits between a search algorithm and the user's numeric
//! function. The search asks it to construct solutions, evaluate them, and
//! optionally resample noisy ones; the objective records every evaluated
//! value in call order.
//!
//! # Evaluation
//!
//! [`Objective::evaluate`] calls the function once, stores the value on the
//! solution, appends it to the history and recomputes the post-attachment.
//! [`Objective::evaluate_constrained`] does the same with a
//! `[objective, constraint]` pair.
//!
//! # Resampling
//!
//! [`Objective::resample`] runs at most once per solution. It computes an
//! averaged value with the configured [`Resample`] strategy and blends it
//! with the evaluated value:
//!
//! ```text
//! value = (1 - balance_rate) * value + balance_rate * resample_value
//! ```
//!
//! Resampling overwrites the evaluated value and does not touch the history.

mod history;


use std::fmt;
use std::sync::Arc;

use zeroth_core::{BoxError, Dimension, LogLogger, Logger, Solution, Value};

use crate::{Config, ConfigError, Error, Report, Resample};

use history::History;

/// A function of a solution: the objective or the constraint.
pub type SolutionFn<A, P> = Arc<dyn Fn(&Solution<A, P>) -> Result<f64, BoxError> + Send + Sync>;

/// Computes a child's attachment from its parent, if any.
pub type InheritFn<A, P> = Arc<dyn Fn(Option<&Solution<A, P>>) -> Option<A> + Send + Sync>;

/// Computes the post-attachment stored after every evaluation.
pub type PostInheritFn<P> = Arc<dyn Fn() -> Option<P> + Send + Sync>;

/// Wraps a user function and tracks the values it produces.
///
/// `A` and `P` are the attachment and post-attachment types of the
/// [`Solution`]s this objective works with.
pub struct Objective<A = (), P = ()> {
    function: Option<SolutionFn<A, P>>,
    dimension: Option<Dimension>,
    constraint: Option<SolutionFn<A, P>>,
    inherit: InheritFn<A, P>,
    post_inherit: PostInheritFn<P>,
    resample: Resample<A, P>,
    config: Config,
    logger: Box<dyn Logger + Send>,
    history: History,
}

fn no_inherit<A, P>(_parent: Option<&Solution<A, P>>) -> Option<A> {
    None
}

fn no_post_inherit<P>() -> Option<P> {
    None
}

impl<A: 'static, P: 'static> Default for Objective<A, P> {
    /// Creates an objective with no function configured.
    fn default() -> Self {
        Self {
            function: None,
            dimension: None,
            constraint: None,
            inherit: Arc::new(no_inherit::<A, P>),
            post_inherit: Arc::new(no_post_inherit::<P>),
            resample: Resample::Mean,
            config: Config::default(),
            logger: Box::new(LogLogger),
            history: History::default(),
        }
    }
}

impl<A: 'static, P: 'static> Objective<A, P> {
    /// Creates an objective for `function` with default settings.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Solution<A, P>) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        let mut objective = Self::default();
        objective.set_function(function);
        objective
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn with_constraint<F>(mut self, constraint: F) -> Self
    where
        F: Fn(&Solution<A, P>) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        self.set_constraint(constraint);
        self
    }

    #[must_use]
    pub fn with_inherit<F>(mut self, inherit: F) -> Self
    where
        F: Fn(Option<&Solution<A, P>>) -> Option<A> + Send + Sync + 'static,
    {
        self.set_inherit(inherit);
        self
    }

    #[must_use]
    pub fn with_post_inherit<F>(mut self, post_inherit: F) -> Self
    where
        F: Fn() -> Option<P> + Send + Sync + 'static,
    {
        self.set_post_inherit(post_inherit);
        self
    }

    #[must_use]
    pub fn with_resample(mut self, resample: Resample<A, P>) -> Self {
        self.resample = resample;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_logger<L>(mut self, logger: L) -> Self
    where
        L: Logger + Send + 'static,
    {
        self.set_logger(logger);
        self
    }

    // --- Solutions ---

    /// Creates an unevaluated solution at `point`.
    ///
    /// The attachment is computed from `parent` by the inherit function.
    /// The objective function is not called.
    pub fn construct_solution(
        &self,
        point: Vec<f64>,
        parent: Option<&Solution<A, P>>,
    ) -> Solution<A, P> {
        let mut solution = Solution::new(point);
        solution.set_attachment((self.inherit)(parent));
        solution
    }

    /// Evaluates `solution` and records its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnconfiguredFunction`] if no function is set, or
    /// [`Error::Function`] if the function fails. On error the solution and
    /// history are left unchanged.
    pub fn evaluate(&mut self, solution: &mut Solution<A, P>) -> Result<(), Error> {
        self.evaluate_with(solution, None)
    }

    /// Evaluates `solution`, writing progress lines when `report` is due.
    ///
    /// Two lines are written: `budget {iteration}, fx result: {value}` and
    /// `x: {point}`.
    ///
    /// # Errors
    ///
    /// Same as [`Objective::evaluate`].
    pub fn evaluate_with(
        &mut self,
        solution: &mut Solution<A, P>,
        report: Option<Report>,
    ) -> Result<(), Error> {
        let function = self.function.as_ref().ok_or(Error::UnconfiguredFunction)?;
        let value = function(solution).map_err(Error::Function)?;

        self.record(solution, Value::Scalar(value));

        if let Some(report) = report
            && report.is_due()
        {
            self.logger.log(&format!(
                "budget {}, fx result: {value}",
                report.iteration()
            ));
            self.logger.log(&format!("x: {:?}", solution.point()));
        }

        Ok(())
    }

    /// Evaluates `solution` as iteration `iteration` of a search, writing
    /// progress lines at the configured cadence.
    ///
    /// Equivalent to [`Objective::evaluate_with`] with a [`Report`] built
    /// from [`Config::log_every`].
    ///
    /// # Errors
    ///
    /// Same as [`Objective::evaluate`].
    pub fn evaluate_reported(
        &mut self,
        solution: &mut Solution<A, P>,
        iteration: usize,
    ) -> Result<(), Error> {
        let report = Report::from_config(iteration, &self.config);
        self.evaluate_with(solution, Some(report))
    }

    /// Evaluates both the function and the constraint and records the pair.
    ///
    /// # Errors
    ///
    /// Returns an `Unconfigured*` error if either function is missing, or the
    /// failure of whichever function failed first. On error the solution and
    /// history are left unchanged.
    pub fn evaluate_constrained(&mut self, solution: &mut Solution<A, P>) -> Result<(), Error> {
        let function = self.function.as_ref().ok_or(Error::UnconfiguredFunction)?;
        let constraint = self
            .constraint
            .as_ref()
            .ok_or(Error::UnconfiguredConstraint)?;

        let objective = function(solution).map_err(Error::Function)?;
        let constraint = constraint(solution).map_err(Error::Constraint)?;

        self.record(
            solution,
            Value::Constrained {
                objective,
                constraint,
            },
        );

        Ok(())
    }

    /// Reduces noise in an evaluated solution by blending in an averaged resample.
    ///
    /// Runs at most once per solution: if the solution already carries a
    /// resample value, this is a no-op. The history is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RepeatCount`] if `repeat` is zero,
    /// [`Error::NotEvaluated`] if the solution has no value, or the failure
    /// of the resample strategy.
    pub fn resample(&mut self, solution: &mut Solution<A, P>, repeat: usize) -> Result<(), Error> {
        if repeat == 0 {
            return Err(ConfigError::RepeatCount.into());
        }

        if solution.resample_value().is_some() {
            log::trace!("solution already resampled, skipping");
            return Ok(());
        }

        let value = solution.value().ok_or(Error::NotEvaluated)?;
        let resampled = self
            .resample
            .sample(self.function.as_ref(), solution, repeat)?;

        let rate = self.config.balance_rate();
        let blended = (1.0 - rate) * value.objective() + rate * resampled;

        solution.set_resample_value(resampled);
        solution.set_value(value.with_objective(blended));
        solution.set_post_attachment((self.post_inherit)());

        log::debug!("resampled {repeat} times: {value} -> {blended}");

        Ok(())
    }

    fn record(&mut self, solution: &mut Solution<A, P>, value: Value) {
        solution.set_value(value);
        self.history.push(value);
        solution.set_post_attachment((self.post_inherit)());
    }

    // --- History ---

    /// Returns every recorded value in evaluation order.
    #[must_use]
    pub fn history(&self) -> &[Value] {
        self.history.values()
    }

    /// Returns the running minimum of the history, index-aligned with it.
    ///
    /// Starts from positive infinity; the sequence is non-increasing.
    #[must_use]
    pub fn history_best_so_far(&self) -> Vec<Value> {
        self.history.best_so_far()
    }

    /// Returns the running minimum of the history.
    ///
    /// Returns `None` if nothing was recorded, or if no recorded value ever
    /// compared below positive infinity (for example, a history of NaN). In
    /// that case [`Objective::history_best_so_far`] reads `Scalar(+inf)`.
    #[must_use]
    pub fn best(&self) -> Option<Value> {
        self.history.best()
    }

    /// Clears the history. Existing solutions are not affected.
    pub fn clean_history(&mut self) {
        log::debug!("clearing {} history entries", self.history.values().len());
        self.history.clear();
    }

    /// Reserves room for at least `additional` more history entries.
    pub fn reserve_history(&mut self, additional: usize) {
        self.history.reserve(additional);
    }

    // --- Accessors ---

    #[must_use]
    pub fn function(&self) -> Option<&SolutionFn<A, P>> {
        self.function.as_ref()
    }

    pub fn set_function<F>(&mut self, function: F)
    where
        F: Fn(&Solution<A, P>) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        self.function = Some(Arc::new(function));
    }

    #[must_use]
    pub fn dimension(&self) -> Option<&Dimension> {
        self.dimension.as_ref()
    }

    pub fn set_dimension(&mut self, dimension: Option<Dimension>) {
        self.dimension = dimension;
    }

    #[must_use]
    pub fn constraint(&self) -> Option<&SolutionFn<A, P>> {
        self.constraint.as_ref()
    }

    pub fn set_constraint<F>(&mut self, constraint: F)
    where
        F: Fn(&Solution<A, P>) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        self.constraint = Some(Arc::new(constraint));
    }

    #[must_use]
    pub fn inherit(&self) -> &InheritFn<A, P> {
        &self.inherit
    }

    pub fn set_inherit<F>(&mut self, inherit: F)
    where
        F: Fn(Option<&Solution<A, P>>) -> Option<A> + Send + Sync + 'static,
    {
        self.inherit = Arc::new(inherit);
    }

    #[must_use]
    pub fn post_inherit(&self) -> &PostInheritFn<P> {
        &self.post_inherit
    }

    pub fn set_post_inherit<F>(&mut self, post_inherit: F)
    where
        F: Fn() -> Option<P> + Send + Sync + 'static,
    {
        self.post_inherit = Arc::new(post_inherit);
    }

    #[must_use]
    pub fn resample_strategy(&self) -> &Resample<A, P> {
        &self.resample
    }

    pub fn set_resample_strategy(&mut self, resample: Resample<A, P>) {
        self.resample = resample;
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn balance_rate(&self) -> f64 {
        self.config.balance_rate()
    }

    /// Replaces the balance rate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BalanceRate`] if `balance_rate` is outside `[0, 1]`.
    pub fn set_balance_rate(&mut self, balance_rate: f64) -> Result<(), ConfigError> {
        self.config = Config::new(balance_rate, self.config.log_every())?;
        Ok(())
    }

    #[must_use]
    pub fn log_every(&self) -> usize {
        self.config.log_every()
    }

    /// Replaces the cadence used by [`Objective::evaluate_reported`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogEvery`] if `log_every` is zero.
    pub fn set_log_every(&mut self, log_every: usize) -> Result<(), ConfigError> {
        self.config = Config::new(self.config.balance_rate(), log_every)?;
        Ok(())
    }

    pub fn set_logger<L>(&mut self, logger: L)
    where
        L: Logger + Send + 'static,
    {
        self.logger = Box::new(logger);
    }
}

impl<A, P> fmt::Debug for Objective<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Objective")
            .field("function", &self.function.is_some())
            .field("dimension", &self.dimension)
            .field("constraint", &self.constraint.is_some())
            .field("resample", &self.resample)
            .field("config", &self.config)
            .field("history_len", &self.history.values().len())
            .finish_non_exhaustive()
    }
}
