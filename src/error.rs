//! Error types for the job-search client.
//!
//! This module provides structured error handling with:
//! - `AppError`: Domain-specific errors for client operations
//! - `Result<T>`: Type alias for Results using AppError
//!
//! API errors display the server-provided description so callers see the
//! same message the server sent.

use thiserror::Error;

use crate::domain::models::JobId;

/// Domain-specific errors for client operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Posting does not exist on the server (HTTP 404)
    #[error("{message}")]
    NotFound { id: JobId, message: String },

    /// Any other non-success API response
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Local database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a not-found error carrying the server's description
    pub fn not_found(id: JobId, msg: impl Into<String>) -> Self {
        Self::NotFound {
            id,
            message: msg.into(),
        }
    }

    /// Create an API error from a status code and description
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
