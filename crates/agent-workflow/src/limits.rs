//! Iteration and wall-clock ceilings

use agent_core::{Error, Limit, Result};
use std::time::Duration;
use tokio::time::Instant;

/// Upper bounds on the effort a single run may spend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionLimits {
    /// Maximum number of model calls per run
    pub max_iterations: usize,

    /// Maximum wall-clock time per run
    pub time_limit: Duration,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            time_limit: Duration::from_secs(300),
        }
    }
}

impl ExecutionLimits {
    /// Create limits from explicit values
    pub fn new(max_iterations: usize, time_limit: Duration) -> Self {
        Self {
            max_iterations,
            time_limit,
        }
    }

    /// Reject limits that would abort every run before it starts
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::Configuration(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        if self.time_limit.is_zero() {
            return Err(Error::Configuration(
                "time_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tracks consumption of [`ExecutionLimits`] during one run
///
/// The call counter only ever grows. Both ceilings are checked before each
/// model call; the returned remaining time bounds the call itself.
#[derive(Debug)]
pub(crate) struct Budget {
    limits: ExecutionLimits,
    started: Instant,
    calls: usize,
}

impl Budget {
    pub(crate) fn start(limits: ExecutionLimits) -> Self {
        Self {
            limits,
            started: Instant::now(),
            calls: 0,
        }
    }

    /// Reserve one model call for `stage`, returning the time left for it
    pub(crate) fn begin_call(&mut self, stage: usize, task: &str) -> Result<Duration> {
        if self.calls >= self.limits.max_iterations {
            return Err(Error::LimitExceeded {
                limit: Limit::Iterations(self.limits.max_iterations),
                stage,
                task: task.to_string(),
            });
        }

        let remaining = self.remaining().ok_or_else(|| self.time_exceeded(stage, task))?;

        self.calls += 1;
        Ok(remaining)
    }

    /// Error for a call that ran out of wall-clock time
    pub(crate) fn time_exceeded(&self, stage: usize, task: &str) -> Error {
        Error::LimitExceeded {
            limit: Limit::Time(self.limits.time_limit),
            stage,
            task: task.to_string(),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    fn remaining(&self) -> Option<Duration> {
        self.limits
            .time_limit
            .checked_sub(self.started.elapsed())
            .filter(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = ExecutionLimits::default();
        assert_eq!(limits.max_iterations, 100);
        assert_eq!(limits.time_limit, Duration::from_secs(300));
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(ExecutionLimits::new(0, Duration::from_secs(1)).validate().is_err());
        assert!(ExecutionLimits::new(1, Duration::ZERO).validate().is_err());
    }

    #[tokio::test]
    async fn test_iteration_ceiling() {
        let mut budget = Budget::start(ExecutionLimits::new(2, Duration::from_secs(60)));

        assert!(budget.begin_call(0, "a").is_ok());
        assert!(budget.begin_call(1, "b").is_ok());

        let err = budget.begin_call(2, "c").unwrap_err();
        assert!(matches!(
            err,
            Error::LimitExceeded {
                limit: Limit::Iterations(2),
                stage: 2,
                ..
            }
        ));
        assert_eq!(budget.calls(), 2);
    }

    #[tokio::test]
    async fn test_time_ceiling() {
        let mut budget = Budget::start(ExecutionLimits::new(10, Duration::from_millis(10)));
        tokio::time::sleep(Duration::from_millis(30)).await;

        let err = budget.begin_call(0, "a").unwrap_err();
        assert!(matches!(
            err,
            Error::LimitExceeded {
                limit: Limit::Time(_),
                ..
            }
        ));
        assert_eq!(budget.calls(), 0);
    }

    #[tokio::test]
    async fn test_remaining_time_shrinks() {
        let mut budget = Budget::start(ExecutionLimits::new(10, Duration::from_secs(60)));
        let remaining = budget.begin_call(0, "a").unwrap();
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(59));
    }
}
