pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{estimator::ZxcvbnEstimator, storage::LocalFileSink};
pub use crate::app::commands::{analyze_password, generate_wordlist, generate_wordlist_to, ReportFormat};
pub use crate::core::{analyzer::PasswordAnalyzer, generator::WordlistGenerator};
pub use crate::domain::model::{GenerationSummary, SeedInputs, StrengthEstimate, StrengthReport, WordSet};
pub use crate::domain::ports::{StrengthEstimator, WordlistSink};
pub use crate::utils::error::{ProbeError, Result};
