//! # Router
//!
//! Assembles routes, middleware and shared state into the axum application.
//! `main` serves it; the integration tests drive it directly.

use crate::handlers::auth::{index, login, logout, signup};
use crate::handlers::contact::{contact_form, submit_contact};
use crate::handlers::health::health_check;
use crate::handlers::pages::{about, home};
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    // Pages that need a logged-in session
    let protected_routes = Router::new()
        .route("/home", get(home))
        .route_layer(axum_middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(index))
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", get(logout))
        .route("/about", get(about))
        .route("/contact", get(contact_form).post(submit_contact))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
