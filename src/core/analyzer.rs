use crate::core::{Result, StrengthEstimator};
use crate::domain::model::StrengthReport;
use std::fmt;

pub const EMPTY_PASSWORD_PROMPT: &str = "Please enter a password to analyze.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// Nothing to score; the estimator was not consulted.
    EmptyPassword,
    Report(StrengthReport),
}

pub struct PasswordAnalyzer<E: StrengthEstimator> {
    estimator: E,
}

impl<E: StrengthEstimator> PasswordAnalyzer<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn analyze(&self, password: &str) -> Result<Analysis> {
        if password.is_empty() {
            return Ok(Analysis::EmptyPassword);
        }

        tracing::debug!("Scoring password of {} characters", password.chars().count());
        let estimate = self.estimator.evaluate(password)?;
        tracing::debug!("Score {} ({} guesses)", estimate.score, estimate.guesses);

        Ok(Analysis::Report(StrengthReport {
            password: password.to_string(),
            estimate,
        }))
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = &self.estimate;
        writeln!(f, "--- Analyzing Password: '{}' ---", self.password)?;
        writeln!(f)?;
        writeln!(f, "Strength Score (0-4): {}", estimate.score)?;
        writeln!(f, "Estimated Guesses: {}", estimate.guesses)?;
        writeln!(
            f,
            "Crack Time (online 100/hr): {}",
            estimate.crack_times.online_throttling_100_per_hour
        )?;
        write!(
            f,
            "Crack Time (offline fast): {}",
            estimate.crack_times.offline_fast_hashing_1e10_per_second
        )?;

        if let Some(warning) = estimate.warning.as_deref().filter(|w| !w.is_empty()) {
            write!(f, "\n\nWarning: {}", warning)?;
        }
        if !estimate.suggestions.is_empty() {
            write!(f, "\n\nSuggestions:")?;
            for suggestion in &estimate.suggestions {
                write!(f, "\n- {}", suggestion)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::EmptyPassword => f.write_str(EMPTY_PASSWORD_PROMPT),
            Analysis::Report(report) => fmt::Display::fmt(report, f),
        }
    }
}
