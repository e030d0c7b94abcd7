use crate::accounts::password;
use crate::accounts::types::SignupForm;
use crate::db::models::User;
use crate::db::Stores;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    UsernameTaken,
}

/// Create the account unless the username is already in use.
///
/// The existence check and the insert are two separate round trips; two
/// concurrent signups for the same name can both pass the check.
pub async fn signup(stores: &Stores, form: &SignupForm) -> AppResult<SignupOutcome> {
    if stores.users.find_by_username(&form.username).await?.is_some() {
        tracing::info!(username = %form.username, "signup rejected: username taken");
        return Ok(SignupOutcome::UsernameTaken);
    }

    let hash = password::hash_password(&form.password)?;
    let user = User::new(form.username.clone(), form.email.clone(), hash);
    stores.users.create_user(&user).await?;

    tracing::info!(username = %user.username, "user created");
    Ok(SignupOutcome::Created)
}
