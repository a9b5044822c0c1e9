use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeError {
    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Output error: {0}")]
    OutputError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Validation,
    Io,
}

impl QuakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuakeError::Network(_) | QuakeError::HttpStatus { .. } | QuakeError::Decode(_) => {
                ErrorCategory::Network
            }
            QuakeError::InvalidUrl(_)
            | QuakeError::ConfigError { .. }
            | QuakeError::MissingConfigError { .. }
            | QuakeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuakeError::ValidationError { .. } => ErrorCategory::Validation,
            QuakeError::IoError(_) | QuakeError::OutputError(_) => ErrorCategory::Io,
        }
    }

    /// Transport failures, non-2xx statuses and undecodable bodies all count
    /// as a failed fetch.
    pub fn is_network_error(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, QuakeError::Network(e) if e.is_timeout())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuakeError::Network(e) if e.is_timeout() => {
                "The earthquake API did not respond in time".to_string()
            }
            QuakeError::Network(e) if e.is_connect() => {
                "Could not connect to the earthquake API".to_string()
            }
            QuakeError::Network(_) => "The request to the earthquake API failed".to_string(),
            QuakeError::HttpStatus { status, .. } => {
                format!("The earthquake API answered with status {}", status)
            }
            QuakeError::Decode(_) => {
                "The earthquake API returned data in an unexpected shape".to_string()
            }
            QuakeError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the API is reachable at the configured base URL and try again"
            }
            ErrorCategory::Configuration => {
                "Set API_BASE_URL (or pass --base-url / --config) to a valid http(s) URL"
            }
            ErrorCategory::Validation => "Inspect the offending records returned by the API",
            ErrorCategory::Io => "Check that the output can be written",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_is_network_kind() {
        let err: QuakeError = serde_json::from_str::<Vec<u32>>("not json")
            .unwrap_err()
            .into();
        assert!(err.is_network_error());
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_status_error_is_network_kind() {
        let err = QuakeError::HttpStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            url: "http://localhost/earthquakes".to_string(),
        };
        assert!(err.is_network_error());
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("503"));
        assert!(err.user_friendly_message().contains("503"));
    }

    #[test]
    fn test_config_errors_are_not_network_kind() {
        let err = QuakeError::MissingConfigError {
            field: "API_BASE_URL".to_string(),
        };
        assert!(!err.is_network_error());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("API_BASE_URL"));
    }
}
