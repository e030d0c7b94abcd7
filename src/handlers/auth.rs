//! # Account Handlers
//!
//! Login page, login, signup and logout. Every POST ends in a redirect; the
//! outcome is reported through a flash notice on the next page.

use crate::accounts::registration::SignupOutcome;
use crate::accounts::types::{LoginForm, SignupForm};
use crate::accounts::{authentication, registration};
use crate::error::AppResult;
use crate::handlers::{db_unavailable_redirect, DB_ERROR_PAGE_STATUS};
use crate::session::flash::Level;
use crate::session::AuthContext;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};

pub const LOGIN_OK: &str = "Login successful!";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const USERNAME_TAKEN: &str = "⚠ Username already exists, choose another!";
pub const SIGNUP_OK: &str = "✅ Signup successful! Please login.";
pub const LOGGED_OUT: &str = "You have been logged out.";

/// GET /
///
/// Login/signup page for anonymous visitors, redirect to `/home` for a
/// logged-in session. Without a database there is nothing to log in to, so
/// the page is replaced by a 500 error page.
pub async fn index(State(state): State<AppState>, mut auth: AuthContext) -> Response {
    if state.is_degraded() {
        let flashes = auth.take_flashes();
        return (DB_ERROR_PAGE_STATUS, auth, views::database_error_page(&flashes)).into_response();
    }

    if auth.is_authenticated() {
        return Redirect::to("/home").into_response();
    }

    let flashes = auth.take_flashes();
    (auth, views::login_page(&flashes)).into_response()
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    mut auth: AuthContext,
    Form(form): Form<LoginForm>,
) -> AppResult<(AuthContext, Redirect)> {
    let Ok(stores) = state.stores() else {
        return Ok(db_unavailable_redirect(auth));
    };

    match authentication::login(stores, &form).await? {
        Some(username) => {
            auth.log_in(username);
            auth.flash(Level::Success, LOGIN_OK);
            Ok((auth, Redirect::to("/home")))
        }
        None => {
            auth.flash(Level::Danger, INVALID_CREDENTIALS);
            Ok((auth, Redirect::to("/")))
        }
    }
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    mut auth: AuthContext,
    Form(form): Form<SignupForm>,
) -> AppResult<(AuthContext, Redirect)> {
    let Ok(stores) = state.stores() else {
        return Ok(db_unavailable_redirect(auth));
    };

    match registration::signup(stores, &form).await? {
        SignupOutcome::Created => auth.flash(Level::Success, SIGNUP_OK),
        SignupOutcome::UsernameTaken => auth.flash(Level::Warning, USERNAME_TAKEN),
    }

    Ok((auth, Redirect::to("/")))
}

/// GET /logout
///
/// Works with or without a database and with or without a logged-in user.
pub async fn logout(mut auth: AuthContext) -> (AuthContext, Redirect) {
    if let Some(username) = auth.user() {
        tracing::info!(%username, "logged out");
    }
    auth.log_out();
    auth.flash(Level::Info, LOGGED_OUT);
    (auth, Redirect::to("/"))
}
