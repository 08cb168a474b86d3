use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::users::models::User;

/// User GraphQL data type
///
/// Public API representation of a user. `id` is the external identifier
/// the surrounding application addresses users by.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A user who can join communities and post threads")]
pub struct UserData {
    /// External identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Handle
    pub username: String,

    /// Avatar URL
    pub image: Option<String>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.external_id,
            name: user.name,
            username: user.username,
            image: user.image,
        }
    }
}
