use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetinaError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API responded with status {status}: {message}")]
    ResponseError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required parameter '{parameter}'")]
    MissingParameterError { parameter: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidParameterError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Parameter,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RetinaError {
    pub fn missing_parameter(parameter: &str) -> Self {
        RetinaError::MissingParameterError {
            parameter: parameter.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RetinaError::HttpError(_) => ErrorCategory::Network,
            RetinaError::ResponseError { .. } => ErrorCategory::Api,
            RetinaError::SerializationError(_) => ErrorCategory::Data,
            RetinaError::MissingParameterError { .. }
            | RetinaError::InvalidParameterError { .. } => ErrorCategory::Parameter,
            RetinaError::ConfigError { .. }
            | RetinaError::ConfigValidationError { .. }
            | RetinaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RetinaError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RetinaError::HttpError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            RetinaError::ResponseError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            RetinaError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 是否值得由呼叫端重試（SDK 本身不重試）
    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    /// 取得 HTTP 狀態碼（若有）
    pub fn status(&self) -> Option<u16> {
        match self {
            RetinaError::ResponseError { status, .. } => Some(*status),
            RetinaError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RetinaError::HttpError(_) => "Could not reach the Retina API".to_string(),
            RetinaError::ResponseError { status: 401, .. }
            | RetinaError::ResponseError { status: 403, .. } => {
                "The Retina API rejected the API key".to_string()
            }
            RetinaError::ResponseError { status, message } => {
                format!("The Retina API returned an error ({}): {}", status, message)
            }
            RetinaError::SerializationError(_) => {
                "The Retina API response could not be decoded".to_string()
            }
            RetinaError::MissingParameterError { parameter } => {
                format!("Parameter '{}' is required", parameter)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the configured base path",
            ErrorCategory::Api => match self.status() {
                Some(401) | Some(403) => "Set a valid key via --api-key or RETINA_API_KEY",
                Some(429) => "Slow down the request rate and try again later",
                Some(s) if s >= 500 => "The service is having trouble, try again later",
                _ => "Check the request arguments against the API documentation",
            },
            ErrorCategory::Data => "Check that the base path points at a Retina API endpoint",
            ErrorCategory::Parameter => "Provide all required arguments with non-empty values",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, RetinaError>;
