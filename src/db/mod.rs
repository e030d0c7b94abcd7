//! # Database Module
//!
//! This module organizes all database-related code into submodules:
//! - `models`: Documents (User, Message)
//! - `users`: The credential store interface
//! - `messages`: The message store interface
//! - `mongo`: MongoDB implementation of both stores
//! - `memory`: In-process implementation of both stores
//!
//! Handlers only see [`Stores`], so the backend is chosen once at startup.

pub mod memory;
pub mod messages;
pub mod models;
pub mod mongo;
pub mod users;

use crate::config::Config;
use crate::error::AppResult;
use std::sync::Arc;

use self::memory::MemoryStore;
use self::messages::MessageStore;
use self::mongo::MongoStore;
use self::users::UserStore;

/// Handles to both collections.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub messages: Arc<dyn MessageStore>,
}

impl Stores {
    /// Open the backend named by `config.mongo_uri`.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        if config.uses_memory_store() {
            tracing::info!("using in-memory store; data is lost on restart");
            return Ok(Self::memory(Arc::new(MemoryStore::new())));
        }

        let mongo = Arc::new(MongoStore::connect(config).await?);
        Ok(Self {
            users: mongo.clone(),
            messages: mongo,
        })
    }

    /// Both stores backed by one shared [`MemoryStore`].
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            messages: store,
        }
    }
}
