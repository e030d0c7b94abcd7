//! # Database Models
//!
//! Documents stored in the two MongoDB collections. Field names match the
//! stored documents exactly, so both structs (de)serialize straight to BSON.
//! The `_id` that MongoDB adds on insert is ignored when reading.

use serde::{Deserialize, Serialize};

/// Name of the collection holding [`User`] documents.
pub const USERS_COLLECTION: &str = "users";

/// Name of the collection holding [`Message`] documents.
pub const MESSAGES_COLLECTION: &str = "messages";

/// User account
///
/// `username` is the lookup key. It is unique only because signup checks for
/// an existing document before inserting; no index backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,

    pub email: String,

    /// Argon2 hash in PHC string format
    /// Example: "$argon2id$v=19$m=19456,t=2,p=1$..."
    ///
    /// Stored under the key `password`; the plain password is never persisted.
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            password_hash,
        }
    }
}

/// Contact-form submission
///
/// Written once per submission and never read back by the web surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn user_hash_is_stored_under_password_key() {
        let user = User::new("alice".into(), "a@example.com".into(), "$argon2id$hash".into());
        let document = bson::to_document(&user).unwrap();
        assert_eq!(
            document,
            doc! { "username": "alice", "email": "a@example.com", "password": "$argon2id$hash" }
        );
    }

    #[test]
    fn stored_documents_with_object_id_deserialize() {
        let document = doc! {
            "_id": bson::oid::ObjectId::new(),
            "name": "Alice",
            "email": "a@example.com",
            "message": "hi",
        };
        let message: Message = bson::from_document(document).unwrap();
        assert_eq!(message.name, "Alice");
        assert_eq!(message.message, "hi");
    }
}
