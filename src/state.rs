//! # Application State
//!
//! Shared state handed to every request handler through axum's `State`
//! extractor. It is built once at startup by the connection guard in
//! [`AppState::new`] and cloned per request (cheap: everything is behind `Arc`).
//!
//! ## Degraded Mode
//! When the database could not be reached at startup and the policy is
//! `degraded`, `db` stays `None`. Every data-dependent handler asks for the
//! stores through [`AppState::stores`] and reports the outage instead of
//! touching the database.

use crate::config::{redact_uri, Config, DbFailurePolicy};
use crate::db::Stores;
use crate::error::{AppError, AppResult};
use crate::session;
use anyhow::{Context, Result};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Store handles, absent in degraded mode
    pub db: Option<Stores>,

    /// Configuration loaded at startup
    pub config: Arc<Config>,

    /// Signs and verifies the session cookie, derived from `SECRET_KEY`
    pub session_key: Key,
}

impl AppState {
    /// Run the connection guard and build the state.
    ///
    /// # Errors
    /// Returns the connection error when the database is unreachable and the
    /// policy is `fail-fast`. Under `degraded` the error is logged and the
    /// state is returned without stores. There is no retry.
    pub async fn new(config: &Config) -> Result<Self> {
        let config = Arc::new(config.clone());

        match Stores::connect(&config).await {
            Ok(stores) => Ok(Self::with_stores(config, stores)),
            Err(e) => match config.db_failure_policy {
                DbFailurePolicy::FailFast => Err(e).context("failed to connect to the database"),
                DbFailurePolicy::Degraded => {
                    tracing::error!(
                        error = %e,
                        uri = %redact_uri(&config.mongo_uri),
                        "error connecting to the database; running in degraded mode"
                    );
                    Ok(Self::degraded(config))
                }
            },
        }
    }

    pub fn with_stores(config: Arc<Config>, stores: Stores) -> Self {
        Self {
            db: Some(stores),
            session_key: session::signing_key(&config.secret_key),
            config,
        }
    }

    pub fn degraded(config: Arc<Config>) -> Self {
        Self {
            db: None,
            session_key: session::signing_key(&config.secret_key),
            config,
        }
    }

    /// The store handles, or [`AppError::DatabaseUnavailable`] in degraded mode.
    pub fn stores(&self) -> AppResult<&Stores> {
        self.db.as_ref().ok_or(AppError::DatabaseUnavailable)
    }

    pub fn is_degraded(&self) -> bool {
        self.db.is_none()
    }
}
