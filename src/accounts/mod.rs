//! # Accounts
//!
//! Signup and login logic, independent of HTTP.
//!
//! ## Submodules
//! - `types`: Form bodies for the account and contact pages
//! - `password`: Argon2 hashing and verification
//! - `registration`: Creating an account
//! - `authentication`: Checking credentials at login
//!
//! ## Flow
//! 1. Signup: look up the username → if free, hash the password and insert
//! 2. Login: look up the username → verify the password against the stored hash
//! 3. On success the handler stores the username in the session

pub mod authentication;
pub mod password;
pub mod registration;
pub mod types;
