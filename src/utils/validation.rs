use crate::utils::error::{ProbeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    if path.ends_with('/') || path.ends_with('\\') {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must name a file, not a directory".to_string(),
        });
    }

    Ok(())
}

/// 至少一個欄位非空
pub fn validate_any_present(fields: &[(&str, &str)]) -> Result<()> {
    if fields.iter().all(|(_, value)| value.is_empty()) {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        tracing::debug!("All of {} are empty", names.join(", "));
        return Err(ProbeError::MissingInputError {
            message: "Please enter at least one input field.".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
