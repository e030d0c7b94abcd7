//! Form bodies posted by the login, signup and contact pages.
//!
//! Fields are taken as-is: no trimming, length or format checks. A missing
//! field is rejected by axum's `Form` extractor before a handler runs.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}
