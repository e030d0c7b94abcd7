//! # Error Handling
//!
//! This module defines the application error type and converts it into an
//! HTML error page. Details are logged; the page only carries a generic message.

use crate::views;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// The `#[from]` attribute lets `?` convert driver errors
/// directly inside handlers and stores.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB driver errors (network, server selection, (de)serialization)
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The store handles were never established (degraded mode)
    #[error("Database connection error")]
    DatabaseUnavailable,

    /// Password hashing failed
    ///
    /// `password_hash::Error` is kept as text because it does not implement
    /// `std::error::Error` without the `std` feature.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Unexpected errors that shouldn't normally occur
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<password_hash::Error> for AppError {
    fn from(e: password_hash::Error) -> Self {
        AppError::PasswordHash(e.to_string())
    }
}

/// Convert AppError into an HTTP response
///
/// Logs the detailed error, then renders a generic error page so that driver
/// and session internals never reach the browser.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                tracing::error!(error = ?e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
            AppError::DatabaseUnavailable => {
                tracing::warn!("request rejected: database unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database connection error. Please try again later.",
                )
            }
            AppError::PasswordHash(e) => {
                tracing::error!(error = %e, "password hashing error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, views::error_page(message, &[])).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
