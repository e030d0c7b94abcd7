//! # In-Memory Backend
//!
//! Process-local stand-in for MongoDB, selected with `MONGO_URI=memory://`.
//! Data lives as long as the process. Used for local development without a
//! database server and by the router tests.

use crate::db::messages::MessageStore;
use crate::db::models::{Message, User};
use crate::db::users::UserStore;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    messages: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, in insertion order.
    pub fn users(&self) -> AppResult<Vec<User>> {
        Ok(lock(&self.users)?.clone())
    }

    /// Snapshot of every stored message, in insertion order.
    pub fn messages(&self) -> AppResult<Vec<Message>> {
        Ok(lock(&self.messages)?.clone())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::Internal("in-memory store lock poisoned".to_string()))
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = lock(&self.users)?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: &User) -> AppResult<()> {
        lock(&self.users)?.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn save_message(&self, message: &Message) -> AppResult<()> {
        lock(&self.messages)?.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_inserted_user_by_username() {
        let store = MemoryStore::new();
        let user = User::new("bob".into(), "bob@example.com".into(), "hash".into());
        store.create_user(&user).await.unwrap();

        assert_eq!(store.find_by_username("bob").await.unwrap(), Some(user));
        assert_eq!(store.find_by_username("Bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn messages_keep_insertion_order() {
        let store = MemoryStore::new();
        for name in ["first", "second"] {
            let message = Message {
                name: name.into(),
                email: "x@example.com".into(),
                message: "hello".into(),
            };
            store.save_message(&message).await.unwrap();
        }

        let names: Vec<_> = store.messages().unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
