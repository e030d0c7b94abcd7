//! # Middleware Module
//!
//! Middleware functions run before the route handlers and can short-circuit
//! the request.
//!
//! ## Our Middleware
//! - `auth`: Redirects anonymous visitors away from pages that need a login

pub mod auth;
