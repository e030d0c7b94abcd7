//! # Health Check Handler
//!
//! Reports whether the app is serving with its database or in degraded mode.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// { "status": "healthy", "database": "connected" }
/// ```
/// In degraded mode the status code is 503 and the body reads
/// `{ "status": "degraded", "database": "unavailable" }`, so load balancers
/// can take the instance out of rotation.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if state.is_degraded() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded", "database": "unavailable" })),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "connected" })),
        )
    }
}
