use crate::domain::model::{SeedInputs, DEFAULT_OUTPUT_FILE};
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_REFERENCE_YEAR: i32 = 1000;
pub const MAX_REFERENCE_YEAR: i32 = 9999;

/// Target description loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetProfile {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub pet_name: Option<String>,
    pub favorite_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub append_years: Option<bool>,
    pub reference_year: Option<i32>,
}

impl TargetProfile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ProbeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_seeds(self) -> SeedInputs {
        let defaults = SeedInputs::default();
        SeedInputs {
            name: self.target.name.unwrap_or_default(),
            dob: self.target.dob.unwrap_or_default(),
            pet_name: self.target.pet_name.unwrap_or_default(),
            favorite_color: self.target.favorite_color.unwrap_or_default(),
            append_years: self.output.append_years.unwrap_or(defaults.append_years),
            output_path: self
                .output
                .path
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            reference_year: self.output.reference_year,
        }
    }
}

impl Validate for TargetProfile {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        if let Some(year) = self.output.reference_year {
            validate_range(
                "output.reference_year",
                year,
                MIN_REFERENCE_YEAR,
                MAX_REFERENCE_YEAR,
            )?;
        }
        Ok(())
    }
}

impl Validate for SeedInputs {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_any_present(&self.fields())?;
        validate_path("output_path", &self.output_path)?;
        if let Some(year) = self.reference_year {
            validate_range("reference_year", year, MIN_REFERENCE_YEAR, MAX_REFERENCE_YEAR)?;
        }
        Ok(())
    }
}
