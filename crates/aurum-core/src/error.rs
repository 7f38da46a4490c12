//! Error types for the Aurum storefront.

use serde::Deserialize;
use thiserror::Error;

/// A shared error type for the entire storefront.
///
/// Gateway failures are kept distinguishable from legitimately empty results:
/// every remote call returns `Result<T, AurumError>` and the caller decides
/// which fallback applies.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AurumError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Failure reported by an external service (document store, chat API)
    #[error("{service} gateway error: {message}")]
    Gateway {
        service: &'static str,
        message: String,
        status: Option<u16>,
        retryable: bool,
    },

    /// A gateway was used before its credentials were configured
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AurumError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Gateway error
    pub fn gateway(
        service: &'static str,
        message: impl Into<String>,
        status: Option<u16>,
        retryable: bool,
    ) -> Self {
        Self::Gateway {
            service,
            message: message.into(),
            status,
            retryable,
        }
    }

    /// Creates a Gateway error from a non-success HTTP response.
    ///
    /// Reads Google's `{"error": {"status", "message"}}` body when present,
    /// otherwise keeps the raw body. 429 and transient 5xx are retryable.
    pub fn http_status(service: &'static str, status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<GoogleErrorWrapper>(body) {
            Ok(wrapper) => {
                let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
                match wrapper.error.status.filter(|text| !text.is_empty()) {
                    Some(status_text) => format!("{status_text}: {msg}"),
                    None => msg,
                }
            }
            Err(_) => body.to_string(),
        };
        let retryable = matches!(status, 429 | 500 | 502 | 503 | 504);

        Self::gateway(service, message, Some(status), retryable)
    }

    /// Creates a NotConfigured error
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a NotConfigured error
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }

    /// Check if the failed operation may succeed when attempted again.
    ///
    /// Only gateway errors flagged as transient (rate limits, 5xx responses,
    /// connection failures) qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Gateway { retryable: true, .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AurumError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AurumError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AurumError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for AurumError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for AurumError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Deserialize)]
struct GoogleErrorWrapper {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// A type alias for `Result<T, AurumError>`.
pub type Result<T> = std::result::Result<T, AurumError>;
