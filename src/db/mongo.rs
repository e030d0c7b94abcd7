//! # MongoDB Backend
//!
//! Production implementation of both stores on top of the official async
//! driver. The driver's `Client` is internally pooled and cheap to clone, so
//! a single `MongoStore` is shared by every request.

use crate::config::Config;
use crate::db::messages::MessageStore;
use crate::db::models::{Message, User, MESSAGES_COLLECTION, USERS_COLLECTION};
use crate::db::users::UserStore;
use crate::error::AppResult;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

#[derive(Clone)]
pub struct MongoStore {
    users: Collection<User>,
    messages: Collection<Message>,
}

impl MongoStore {
    /// Connect to MongoDB and verify the server answers.
    ///
    /// Creating a `Client` does not touch the network, so a `ping` is sent to
    /// force server selection. It gives up after `config.mongo_timeout`.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_uri).await?;
        options.server_selection_timeout = Some(config.mongo_timeout);
        options.connect_timeout = Some(config.mongo_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let db = client.database(&config.mongo_database);
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(database = %config.mongo_database, "connected to MongoDB");

        Ok(Self {
            users: db.collection(USERS_COLLECTION),
            messages: db.collection(MESSAGES_COLLECTION),
        })
    }
}

#[async_trait]
impl UserStore for MongoStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self.users.find_one(doc! { "username": username }).await?;
        Ok(user)
    }

    async fn create_user(&self, user: &User) -> AppResult<()> {
        self.users.insert_one(user).await?;
        Ok(())
    }
}

#[async_trait]
impl MessageStore for MongoStore {
    async fn save_message(&self, message: &Message) -> AppResult<()> {
        self.messages.insert_one(message).await?;
        Ok(())
    }
}
