use crate::domain::model::{CrackTimes, StrengthEstimate};
use crate::domain::ports::StrengthEstimator;
use crate::utils::error::{ProbeError, Result};

/// [`StrengthEstimator`] backed by the `zxcvbn` crate.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnEstimator {
    user_inputs: Vec<String>,
}

impl ZxcvbnEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words specific to the password owner (name, email parts, ...) that
    /// should count as easily guessable.
    pub fn with_user_inputs(user_inputs: Vec<String>) -> Self {
        Self { user_inputs }
    }
}

impl StrengthEstimator for ZxcvbnEstimator {
    fn evaluate(&self, password: &str) -> Result<StrengthEstimate> {
        let user_inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy =
            zxcvbn::zxcvbn(password, &user_inputs).map_err(|e| ProbeError::EstimatorError {
                message: e.to_string(),
            })?;

        let times = entropy.crack_times();
        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(StrengthEstimate {
            score: entropy.score(),
            guesses: entropy.guesses(),
            crack_times: CrackTimes {
                online_throttling_100_per_hour: times.online_throttling_100_per_hour().to_string(),
                online_no_throttling_10_per_second: times
                    .online_no_throttling_10_per_second()
                    .to_string(),
                offline_slow_hashing_1e4_per_second: times
                    .offline_slow_hashing_1e4_per_second()
                    .to_string(),
                offline_fast_hashing_1e10_per_second: times
                    .offline_fast_hashing_1e10_per_second()
                    .to_string(),
            },
            warning,
            suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_password_scores_low() {
        let estimate = ZxcvbnEstimator::new().evaluate("password").unwrap();

        assert_eq!(estimate.score, 0);
        assert!(estimate.guesses < 1_000);
        assert!(estimate.warning.is_some());
        assert!(!estimate.crack_times.online_throttling_100_per_hour.is_empty());
    }

    #[test]
    fn test_long_random_password_scores_high() {
        let estimate = ZxcvbnEstimator::new()
            .evaluate("tR7#qLp9!vXz2&mWk4$Hs")
            .unwrap();

        assert_eq!(estimate.score, 4);
        assert!(estimate.suggestions.is_empty());
    }

    #[test]
    fn test_user_inputs_lower_the_estimate() {
        let password = "zorblaxian1987";
        let plain = ZxcvbnEstimator::new().evaluate(password).unwrap();
        let personal =
            ZxcvbnEstimator::with_user_inputs(vec!["zorblaxian".to_string()]).evaluate(password).unwrap();

        assert!(personal.guesses < plain.guesses);
    }

    #[test]
    fn test_blank_password_is_an_estimator_error() {
        let err = ZxcvbnEstimator::new().evaluate("").unwrap_err();
        assert!(matches!(err, ProbeError::EstimatorError { .. }));
    }
}
