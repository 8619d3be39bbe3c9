//! The two operations every front end is built on.

use crate::adapters::storage::LocalFileSink;
use crate::core::analyzer::{Analysis, PasswordAnalyzer};
use crate::core::generator::WordlistGenerator;
use crate::domain::model::{GenerationSummary, SeedInputs};
use crate::domain::ports::{StrengthEstimator, WordlistSink};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Score `password` and render the result. An empty password renders the
/// prompt text in either format.
pub fn analyze_password<E: StrengthEstimator>(
    estimator: E,
    password: &str,
    format: ReportFormat,
) -> Result<String> {
    let analysis = PasswordAnalyzer::new(estimator).analyze(password)?;
    match (format, analysis) {
        (ReportFormat::Json, Analysis::Report(report)) => Ok(serde_json::to_string_pretty(&report)?),
        (_, analysis) => Ok(analysis.to_string()),
    }
}

pub fn generate_wordlist_to<S: WordlistSink>(
    seeds: &SeedInputs,
    sink: S,
) -> Result<GenerationSummary> {
    seeds.validate()?;
    WordlistGenerator::new(sink).generate(seeds)
}

/// Generate into the file named by `seeds.output_path`.
pub fn generate_wordlist(seeds: &SeedInputs) -> Result<GenerationSummary> {
    generate_wordlist_to(seeds, LocalFileSink::new(&seeds.output_path))
}
