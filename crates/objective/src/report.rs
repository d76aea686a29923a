use crate::{Config, ConfigError};

/// Requests progress lines from an evaluation.
///
/// Lines are written when `iteration` is a multiple of `every`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    iteration: usize,
    every: usize,
}

impl Report {
    /// Creates a report request with an explicit cadence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogEvery`] if `every` is zero.
    pub fn new(iteration: usize, every: usize) -> Result<Self, ConfigError> {
        if every == 0 {
            return Err(ConfigError::LogEvery);
        }
        Ok(Self { iteration, every })
    }

    /// Creates a report request using the cadence of `config`.
    #[must_use]
    pub fn from_config(iteration: usize, config: &Config) -> Self {
        // Config::new rejects a zero cadence.
        Self {
            iteration,
            every: config.log_every(),
        }
    }

    #[must_use]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    #[must_use]
    pub fn every(&self) -> usize {
        self.every
    }

    /// Returns true if lines should be written for this iteration.
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.iteration % self.every == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_on_multiples_of_cadence() {
        let report = Report::new(6, 3).unwrap();
        assert!(report.is_due());
        assert!(!Report::new(7, 3).unwrap().is_due());
        assert!(Report::new(0, 3).unwrap().is_due());
    }

    #[test]
    fn default_config_reports_every_hundred() {
        let config = Config::default();

        assert!(Report::from_config(0, &config).is_due());
        assert!(!Report::from_config(99, &config).is_due());
        assert!(Report::from_config(200, &config).is_due());
    }

    #[test]
    fn cadence_follows_config() {
        let config = Config::new(1.0, 5).unwrap();
        let report = Report::from_config(10, &config);

        assert_eq!(report.every(), 5);
        assert!(report.is_due());
        assert!(!Report::from_config(11, &config).is_due());
    }

    #[test]
    fn zero_cadence_is_rejected() {
        assert_eq!(Report::new(0, 0), Err(ConfigError::LogEvery));
    }
}
