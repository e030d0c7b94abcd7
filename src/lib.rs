//! Session-based travel booking portal: login, signup, home, about and
//! contact pages on top of MongoDB.

pub mod accounts;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod session;
pub mod state;
pub mod views;

pub use app::router;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
