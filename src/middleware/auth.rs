use crate::session::flash::Level;
use crate::session::AuthContext;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const LOGIN_REQUIRED: &str = "⚠ Please login first!";

/// Let authenticated sessions through; send everyone else to the login page.
///
/// In degraded mode the request is passed on untouched so the handler can
/// report the database outage first.
pub async fn require_auth(
    State(state): State<AppState>,
    mut auth: AuthContext,
    request: Request,
    next: Next,
) -> Response {
    if auth.is_authenticated() || state.is_degraded() {
        return next.run(request).await;
    }

    auth.flash(Level::Danger, LOGIN_REQUIRED);
    (auth, Redirect::to("/")).into_response()
}
