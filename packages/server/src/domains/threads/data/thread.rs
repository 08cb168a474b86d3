use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::users::models::User;

/// Author of a thread, reduced to the fields the feed renders.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "The author of a thread or reply")]
pub struct ThreadAuthorData {
    /// External identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Avatar URL
    pub image: Option<String>,
}

impl From<User> for ThreadAuthorData {
    fn from(user: User) -> Self {
        Self {
            id: user.external_id,
            name: user.name,
            image: user.image,
        }
    }
}

/// A reply to a thread, with its author resolved.
///
/// Replies are resolved one level deep, matching the feed's rendering depth.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A reply to a thread")]
pub struct ThreadReplyData {
    pub id: Uuid,
    pub text: String,
    pub author: ThreadAuthorData,
    pub created_at: DateTime<Utc>,
}

/// A top-level thread with author and replies resolved.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A thread posted in a community")]
pub struct ThreadData {
    pub id: Uuid,
    pub text: String,
    pub author: ThreadAuthorData,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<ThreadReplyData>,
}
