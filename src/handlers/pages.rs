//! # Page Handlers
//!
//! Home (authenticated) and About (public).

use crate::handlers::DB_ERROR_PAGE_STATUS;
use crate::session::AuthContext;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

/// GET /home
///
/// Sits behind `require_auth`, so an anonymous request never gets here. The
/// `None` arm only covers the handler being mounted without the middleware.
pub async fn home(State(state): State<AppState>, mut auth: AuthContext) -> Response {
    let flashes = auth.take_flashes();

    if state.is_degraded() {
        let page = views::error_page("Database connection error. Please contact support.", &flashes);
        return (DB_ERROR_PAGE_STATUS, auth, page).into_response();
    }

    match auth.user().map(|username| views::home_page(username, &flashes)) {
        Some(page) => (auth, page).into_response(),
        None => (auth, Redirect::to("/")).into_response(),
    }
}

/// GET /about
pub async fn about(mut auth: AuthContext) -> Response {
    let flashes = auth.take_flashes();
    (auth, views::about_page(&flashes)).into_response()
}
