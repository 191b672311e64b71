use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

/// Sink for check outcomes, tied to one running test case.
///
/// Failures mark the case as failed but must not stop the process, so other
/// checks and other test cases keep running.
pub trait Reporter: Send + Sync {
    fn log_success(&self, message: &str);
    fn log_failure(&self, message: &str);
}

/// A single recorded check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed(String),
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Passed(message) | Self::Failed(message) => message,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Reporter that collects outcomes for one named test case and echoes them
/// as tracing events.
///
/// A failed check marks the case as failed: dropping a `TestCase` that still
/// holds failures panics, failing the test it belongs to. Tests that expect
/// failures drain them with [`TestCase::take_outcomes`] or
/// [`TestCase::take_failures`]. Call [`TestCase::assert_passed`] to fail
/// early with every message listed.
#[derive(Debug)]
pub struct TestCase {
    name: String,
    outcomes: Mutex<Vec<Outcome>>,
}

impl TestCase {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcomes: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every outcome recorded so far, in the order the checks ran
    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.lock().clone()
    }

    /// Messages of the failed checks only
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|outcome| outcome.is_failure())
            .map(|outcome| outcome.message().to_string())
            .collect()
    }

    /// Remove and return every recorded outcome, leaving nothing to fail the
    /// case on drop
    #[must_use]
    pub fn take_outcomes(&self) -> Vec<Outcome> {
        std::mem::take(&mut *self.lock())
    }

    /// Like [`TestCase::take_outcomes`], keeping only the failure messages
    #[must_use]
    pub fn take_failures(&self) -> Vec<String> {
        self.take_outcomes()
            .into_iter()
            .filter(Outcome::is_failure)
            .map(|outcome| outcome.message().to_string())
            .collect()
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        !self.lock().iter().any(Outcome::is_failure)
    }

    /// # Panics
    ///
    /// Panics listing every failure message if any check failed.
    pub fn assert_passed(&self) {
        let failures = self.failures();
        assert!(
            failures.is_empty(),
            "test case '{}' had {} failed check(s):\n{}",
            self.name,
            failures.len(),
            failures.join("\n")
        );
    }

    fn record(&self, outcome: Outcome) {
        self.lock().push(outcome);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Outcome>> {
        // A panicking check elsewhere must not hide what was already recorded
        self.outcomes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.assert_passed();
        }
    }
}

impl Reporter for TestCase {
    fn log_success(&self, message: &str) {
        info!(test_case = %self.name, "{message}");
        self.record(Outcome::Passed(message.to_string()));
    }

    fn log_failure(&self, message: &str) {
        error!(test_case = %self.name, "{message}");
        self.record(Outcome::Failed(message.to_string()));
    }
}
