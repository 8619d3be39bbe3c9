use crate::domain::model::{StrengthEstimate, WordSet};
use crate::utils::error::Result;

/// Opaque password-strength scoring backend.
pub trait StrengthEstimator {
    fn evaluate(&self, password: &str) -> Result<StrengthEstimate>;
}

/// Destination for a finished wordlist. Returns the resolved location written to.
pub trait WordlistSink {
    fn write_words(&self, words: &WordSet) -> Result<String>;
}

impl<T: StrengthEstimator + ?Sized> StrengthEstimator for &T {
    fn evaluate(&self, password: &str) -> Result<StrengthEstimate> {
        (**self).evaluate(password)
    }
}

impl<T: WordlistSink + ?Sized> WordlistSink for &T {
    fn write_words(&self, words: &WordSet) -> Result<String> {
        (**self).write_words(words)
    }
}
