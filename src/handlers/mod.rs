//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers.
//!
//! ## Submodules
//! - `auth`: Login page, login, signup, logout
//! - `pages`: Home and About
//! - `contact`: Contact form and submission
//! - `health`: Health check endpoint (for monitoring)
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract `State<AppState>`, the request's [`AuthContext`] and the form body
//! 2. Ask the state for the stores; in degraded mode report the outage
//! 3. Call the account logic or a store
//! 4. Flash the outcome and redirect, or render a page, returning the
//!    `AuthContext` alongside so session changes reach the cookie

pub mod auth;
pub mod contact;
pub mod health;
pub mod pages;

use crate::session::flash::Level;
use crate::session::AuthContext;
use axum::http::StatusCode;
use axum::response::Redirect;

pub const DB_UNAVAILABLE: &str = "Database connection error. Please try again later.";

/// Status of the pages that replace `/` and `/home` in degraded mode.
pub const DB_ERROR_PAGE_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// Degraded-mode answer for data-dependent actions: flash and go back to `/`.
pub(crate) fn db_unavailable_redirect(mut auth: AuthContext) -> (AuthContext, Redirect) {
    tracing::warn!("request rejected: database unavailable");
    auth.flash(Level::Danger, DB_UNAVAILABLE);
    (auth, Redirect::to("/"))
}
