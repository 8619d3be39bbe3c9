pub mod affix;
pub mod analyzer;
pub mod casing;
pub mod dob;
pub mod generator;
pub mod leet;

pub use crate::domain::model::{GenerationSummary, SeedInputs, StrengthEstimate, WordSet};
pub use crate::domain::ports::{StrengthEstimator, WordlistSink};
pub use crate::utils::error::Result;
