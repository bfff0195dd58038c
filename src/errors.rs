//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the judgment search client, providing
//! structured error types for every failure path the fetch pipeline can hit.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from configuration, transport, and decoding
//! - **Output**: Structured error types with context, plus user-facing notices
//! - **Error Categories**: Configuration, Network, Decode, PDF resolution
//!
//! Cancellation is deliberately absent from this enum: a superseded fetch is
//! not an error and is expressed as `fetcher::FetchOutcome::Superseded`.

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types for the judgment search client
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Network-related errors
    #[error("Network error: {details}")]
    Network { details: String },

    /// Non-success HTTP responses from the search API
    #[error("HTTP {status} from search API: {details}")]
    Http { status: u16, details: String },

    /// Response body decoding errors
    #[error("Failed to decode response from {endpoint}: {details}")]
    Decode { endpoint: String, details: String },

    /// PDF URL resolution failed for a document
    #[error("No PDF available for document '{doc_id}'")]
    PdfNotFound { doc_id: String },
}

impl SearchError {
    /// Get error category for structured logging
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::Config { .. } | SearchError::ValidationFailed { .. } => "configuration",
            SearchError::Network { .. } | SearchError::Http { .. } => "network",
            SearchError::Decode { .. } => "decode",
            SearchError::PdfNotFound { .. } => "pdf",
        }
    }

    /// User-visible notice for errors that should block with a message rather
    /// than silently reset state. Only PDF resolution qualifies; everything
    /// else resets the result list and is reported to the failure collector.
    pub fn user_notice(&self) -> Option<String> {
        match self {
            SearchError::PdfNotFound { doc_id } => {
                Some(format!("PDF not found for judgment {}", doc_id))
            }
            _ => None,
        }
    }
}

// Conversion from common error types
impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Network {
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode {
            endpoint: "unknown".to_string(),
            details: err.to_string(),
        }
    }
}
