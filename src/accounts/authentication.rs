use crate::accounts::password;
use crate::accounts::types::LoginForm;
use crate::db::Stores;
use crate::error::AppResult;

/// Check a username/password pair.
///
/// Returns the username on success and `None` otherwise. An unknown user and
/// a wrong password produce the same `None`, and both pay for one Argon2
/// verification.
pub async fn login(stores: &Stores, form: &LoginForm) -> AppResult<Option<String>> {
    let Some(user) = stores.users.find_by_username(&form.username).await? else {
        password::verify_dummy(&form.password);
        tracing::info!(username = %form.username, "login failed");
        return Ok(None);
    };

    if password::verify_password(&form.password, &user.password_hash) {
        tracing::info!(username = %user.username, "login succeeded");
        Ok(Some(user.username))
    } else {
        tracing::info!(username = %form.username, "login failed");
        Ok(None)
    }
}
