use thiserror::Error;

/// Configuration for an [`Objective`](crate::Objective).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    balance_rate: f64,
    log_every: usize,
}

/// Errors that can occur when validating configuration or call arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("balance_rate must be finite and within [0, 1]")]
    BalanceRate,

    #[error("repeat count must be positive")]
    RepeatCount,

    #[error("log cadence must be positive")]
    LogEvery,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            balance_rate: 1.0,
            log_every: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated balance rate and log cadence.
    ///
    /// The balance rate is the weight given to the averaged resample when it
    /// is blended with the original evaluation. The log cadence is the
    /// iteration interval at which reported evaluations write progress lines.
    ///
    /// # Errors
    ///
    /// Returns an error if `balance_rate` is non-finite or outside `[0, 1]`,
    /// or if `log_every` is zero.
    pub fn new(balance_rate: f64, log_every: usize) -> Result<Self, ConfigError> {
        if !balance_rate.is_finite() || !(0.0..=1.0).contains(&balance_rate) {
            return Err(ConfigError::BalanceRate);
        }
        if log_every == 0 {
            return Err(ConfigError::LogEvery);
        }

        Ok(Self {
            balance_rate,
            log_every,
        })
    }

    /// Returns the weight given to the resampled value when blending.
    #[must_use]
    pub fn balance_rate(&self) -> f64 {
        self.balance_rate
    }

    /// Returns the iteration interval between progress reports.
    #[must_use]
    pub fn log_every(&self) -> usize {
        self.log_every
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    #[serde(default = "default_balance_rate")]
    balance_rate: f64,

    #[serde(default = "default_log_every")]
    log_every: usize,
}

#[cfg(feature = "serde")]
fn default_balance_rate() -> f64 {
    Config::default().balance_rate
}

#[cfg(feature = "serde")]
fn default_log_every() -> usize {
    Config::default().log_every
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.balance_rate, raw.log_every)
    }
}
