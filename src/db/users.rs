//! # Credential Store
//!
//! Operations on the `users` collection. Users are created on signup and read
//! on login; nothing updates or deletes them.

use crate::db::models::User;
use crate::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by username. `Ok(None)` when no document matches.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user document.
    ///
    /// Does not check for an existing username; callers do that first.
    async fn create_user(&self, user: &User) -> AppResult<()>;
}
