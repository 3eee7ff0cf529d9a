use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoveError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Remote service returned {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Remote,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LoveError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LoveError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LoveError::InvalidInput { .. } | LoveError::NotFound { .. } => ErrorCategory::Input,
            LoveError::RemoteError { .. } | LoveError::ApiError(_) => ErrorCategory::Remote,
            LoveError::IoError(_) | LoveError::SerializationError(_) => ErrorCategory::Storage,
            LoveError::ConfigError { .. }
            | LoveError::InvalidConfigValueError { .. }
            | LoveError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LoveError::NotFound { .. } => ErrorSeverity::Low,
            // 遠端錯誤通常可以重試
            LoveError::RemoteError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            LoveError::ApiError(_) => ErrorSeverity::Medium,
            LoveError::InvalidInput { .. } | LoveError::RemoteError { .. } => ErrorSeverity::High,
            LoveError::IoError(_) | LoveError::SerializationError(_) => ErrorSeverity::High,
            LoveError::ConfigError { .. }
            | LoveError::InvalidConfigValueError { .. }
            | LoveError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LoveError::InvalidInput { field, reason } => {
                format!("Please check '{}': {}", field, reason)
            }
            LoveError::NotFound { what } => format!("Nothing found for {}", what),
            LoveError::RemoteError { status, .. } => {
                format!("The remote service rejected the request (HTTP {})", status)
            }
            LoveError::ApiError(_) => "Could not reach the remote service".to_string(),
            LoveError::IoError(_) => "Could not read or write local files".to_string(),
            LoveError::SerializationError(_) => "Stored data is not valid JSON".to_string(),
            LoveError::ConfigError { message } => format!("Configuration problem: {}", message),
            LoveError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            LoveError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the values you entered and try again",
            ErrorCategory::Remote => {
                "Check your network connection and the [remote] settings, then retry"
            }
            ErrorCategory::Storage => {
                "Check permissions on the planner state file, or delete it to start fresh"
            }
            ErrorCategory::Configuration => {
                "Fix the configuration file or the environment variables it references"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LoveError>;
