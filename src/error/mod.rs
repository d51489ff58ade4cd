use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Wikidata error: {0}")]
    Wikidata(#[from] WikidataError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Errors raised by the Wikidata query client.
///
/// Anything the upstream endpoints can do wrong lands here: transport
/// faults, timeouts, non-2xx statuses, error payloads embedded in a 200
/// response, and response bodies that do not match the expected shape.
/// Callers above the client never see a raw `reqwest::Error`.
#[derive(Debug, Error)]
pub enum WikidataError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for Wikidata client operations
pub type WikidataResult<T> = Result<T, WikidataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing key");

        let err = AppError::Internal {
            message: "unexpected".to_string(),
        };
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }

    #[test]
    fn test_wikidata_error_display() {
        let err = WikidataError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 429 - rate limited");

        let err = WikidataError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = WikidataError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_wikidata_error_conversion_to_app_error() {
        let err = WikidataError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Wikidata(_)));
        assert!(app_err.to_string().contains("Request timeout"));
    }
}
