//! Structured error types for callers that need a machine-readable code.
//!
//! The CLI uses these to emit JSON error objects with `--format json`.

use serde::{Deserialize, Serialize};
use std::fmt;

use textstat_metrics::MetricsError;
use textstat_sentiment::SentimentError;

/// Error codes for textstat operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An average or ratio was asked of an empty token sequence.
    DivisionByZero,
    /// Reading or writing text failed.
    IoError,
    /// Configuration file or flags were invalid.
    InvalidConfig,
    /// The sentiment collaborator failed.
    SentimentError,
    /// Internal error (unexpected state).
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::DivisionByZero => write!(f, "division_by_zero"),
            ErrorCode::IoError => write!(f, "io_error"),
            ErrorCode::InvalidConfig => write!(f, "invalid_config"),
            ErrorCode::SentimentError => write!(f, "sentiment_error"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextstatError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl TextstatError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_config(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidConfig, format!("Invalid config: {}", err))
    }

    pub fn io_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::IoError, format!("I/O error: {}", err))
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, format!("Internal error: {}", err))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for TextstatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for TextstatError {}

impl From<MetricsError> for TextstatError {
    fn from(err: MetricsError) -> Self {
        Self::new(ErrorCode::DivisionByZero, err.to_string())
    }
}

impl From<SentimentError> for TextstatError {
    fn from(err: SentimentError) -> Self {
        Self::new(ErrorCode::SentimentError, err.to_string())
    }
}

impl From<std::io::Error> for TextstatError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}

impl From<anyhow::Error> for TextstatError {
    fn from(err: anyhow::Error) -> Self {
        Self::from_anyhow(&err)
    }
}

impl TextstatError {
    /// Classify an application error by the first known error type in its
    /// chain.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(metrics) = err.downcast_ref::<MetricsError>() {
            return Self::from(metrics.clone());
        }
        if let Some(sentiment) = err.downcast_ref::<SentimentError>() {
            return Self::new(ErrorCode::SentimentError, sentiment.to_string());
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return Self::with_details(ErrorCode::IoError, format!("{:#}", err), io.to_string());
        }
        Self::internal(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_to_snake_case() {
        let err = TextstatError::from(MetricsError::division("rounded average"));
        let json = err.to_json();
        assert!(json.contains("\"code\":\"division_by_zero\""));
    }

    #[test]
    fn error_display_includes_code() {
        let err = TextstatError::new(ErrorCode::InvalidConfig, "bad key");
        let display = err.to_string();
        assert!(display.contains("[invalid_config]"));
        assert!(display.contains("bad key"));
    }

    #[test]
    fn anyhow_wrapped_metrics_error_keeps_its_code() {
        let err = anyhow::Error::new(MetricsError::division("rounded average"))
            .context("while rendering");
        let converted = TextstatError::from(err);
        assert_eq!(converted.code, ErrorCode::DivisionByZero);
    }

    #[test]
    fn anyhow_wrapped_io_error_maps_to_io_code() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::new(io).context("Failed to open x.txt");
        let converted = TextstatError::from(err);
        assert_eq!(converted.code, ErrorCode::IoError);
        assert_eq!(converted.details.as_deref(), Some("gone"));
    }
}
