use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DeskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeskError::ConfigValidationError { .. }
            | DeskError::InvalidConfigValueError { .. }
            | DeskError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DeskError::IoError(_) | DeskError::SerializationError(_) | DeskError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DeskError::MissingConfigError { .. } | DeskError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DeskError::ConfigValidationError { .. } => ErrorSeverity::High,
            DeskError::SerializationError(_) | DeskError::CsvError(_) => ErrorSeverity::Medium,
            DeskError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DeskError::IoError(_) => {
                "Check that the config file exists and that stdout is writable".to_string()
            }
            DeskError::SerializationError(_) | DeskError::CsvError(_) => {
                "Try the plain text output format with --format text".to_string()
            }
            DeskError::ConfigValidationError { field, .. } => {
                format!("Fix the TOML syntax around '{}'", field)
            }
            DeskError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            DeskError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Output => format!("Could not produce output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
