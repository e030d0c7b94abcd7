//! # Message Store
//!
//! Contact-form submissions land in the `messages` collection.

use crate::db::models::Message;
use crate::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn save_message(&self, message: &Message) -> AppResult<()>;
}
