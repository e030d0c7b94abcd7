//! # Contact Handlers

use crate::accounts::types::ContactForm;
use crate::db::models::Message;
use crate::error::AppResult;
use crate::handlers::db_unavailable_redirect;
use crate::session::flash::Level;
use crate::session::AuthContext;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};

pub const MESSAGE_SENT: &str = "✅ Your message has been submitted successfully!";

/// GET /contact
pub async fn contact_form(State(state): State<AppState>, mut auth: AuthContext) -> Response {
    if state.is_degraded() {
        return db_unavailable_redirect(auth).into_response();
    }

    let flashes = auth.take_flashes();
    (auth, views::contact_page(&flashes)).into_response()
}

/// POST /contact
///
/// Stores the submission as-is; there is no validation.
pub async fn submit_contact(
    State(state): State<AppState>,
    mut auth: AuthContext,
    Form(form): Form<ContactForm>,
) -> AppResult<(AuthContext, Redirect)> {
    let Ok(stores) = state.stores() else {
        return Ok(db_unavailable_redirect(auth));
    };

    let message = Message {
        name: form.name,
        email: form.email,
        message: form.message,
    };
    stores.messages.save_message(&message).await?;
    tracing::info!(name = %message.name, "contact message stored");

    auth.flash(Level::Success, MESSAGE_SENT);
    Ok((auth, Redirect::to("/contact")))
}
