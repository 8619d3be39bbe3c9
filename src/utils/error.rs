use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing input: {message}")]
    MissingInputError { message: String },

    #[error("Strength estimation failed: {message}")]
    EstimatorError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Estimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::IoError(_) => ErrorCategory::Io,
            ProbeError::SerializationError(_) => ErrorCategory::Io,
            ProbeError::ConfigValidationError { .. }
            | ProbeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ProbeError::MissingInputError { .. } => ErrorCategory::Input,
            ProbeError::EstimatorError { .. } => ErrorCategory::Estimation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProbeError::MissingInputError { .. } => ErrorSeverity::Medium,
            ProbeError::ConfigValidationError { .. }
            | ProbeError::InvalidConfigValueError { .. }
            | ProbeError::EstimatorError { .. } => ErrorSeverity::High,
            ProbeError::IoError(_) | ProbeError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ProbeError::IoError(_) => {
                "Check that the output path is writable and its parent directory can be created"
                    .to_string()
            }
            ProbeError::SerializationError(_) => "Retry with --format text".to_string(),
            ProbeError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the profile file", field)
            }
            ProbeError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            ProbeError::MissingInputError { .. } => {
                "Pass at least one of --name, --dob, --pet or --color".to_string()
            }
            ProbeError::EstimatorError { .. } => "Try a different password".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::MissingInputError { message } => message.clone(),
            ProbeError::IoError(e) => format!("Could not write wordlist: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_medium_severity() {
        let e = ProbeError::MissingInputError {
            message: "Please enter at least one input field.".to_string(),
        };
        assert_eq!(e.category(), ErrorCategory::Input);
        assert_eq!(e.severity(), ErrorSeverity::Medium);
        assert_eq!(
            e.user_friendly_message(),
            "Please enter at least one input field."
        );
    }

    #[test]
    fn test_io_error_is_critical() {
        let e: ProbeError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(e.category(), ErrorCategory::Io);
        assert_eq!(e.severity(), ErrorSeverity::Critical);
        assert!(e.user_friendly_message().contains("denied"));
    }
}
