use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::common::SortOrder;
use crate::domains::communities::models::Community;
use crate::domains::threads::data::ThreadData;
use crate::domains::users::data::UserData;
use crate::domains::users::models::User;

/// Community GraphQL data type
///
/// Public API representation of a community. `id` is the external
/// identifier the surrounding application addresses communities by.
/// Carries the resolved member list; directory rows and mutation
/// payloads both return it.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A community grouping members and threads")]
pub struct CommunityData {
    /// External identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Handle
    pub username: String,

    /// Logo URL
    pub image: String,

    /// Short description
    pub bio: String,

    /// When the community was created
    pub created_at: DateTime<Utc>,

    /// Current members, in join order
    pub members: Vec<UserData>,
}

impl CommunityData {
    pub fn assemble(community: Community, members: Vec<User>) -> Self {
        Self {
            id: community.external_id,
            name: community.name,
            username: community.username,
            image: community.image,
            bio: community.bio,
            created_at: community.created_at,
            members: members.into_iter().map(UserData::from).collect(),
        }
    }
}

/// A community with its creator and member list resolved.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A community with creator and members resolved")]
pub struct CommunityDetailsData {
    pub id: String,
    pub name: String,
    pub username: String,
    pub image: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserData,
    pub members: Vec<UserData>,
}

impl CommunityDetailsData {
    pub fn assemble(community: Community, created_by: User, members: Vec<User>) -> Self {
        Self {
            id: community.external_id,
            name: community.name,
            username: community.username,
            image: community.image,
            bio: community.bio,
            created_at: community.created_at,
            created_by: UserData::from(created_by),
            members: members.into_iter().map(UserData::from).collect(),
        }
    }
}

/// A community with its threads resolved (authors and replies included).
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A community with its threads resolved")]
pub struct CommunityPostsData {
    pub id: String,
    pub name: String,
    pub username: String,
    pub image: String,
    pub threads: Vec<ThreadData>,
}

impl CommunityPostsData {
    pub fn assemble(community: Community, threads: Vec<ThreadData>) -> Self {
        Self {
            id: community.external_id,
            name: community.name,
            username: community.username,
            image: community.image,
            threads,
        }
    }
}

/// One page of the community directory.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "One page of the community directory")]
pub struct CommunityConnection {
    /// The communities on this page
    pub communities: Vec<CommunityData>,
    /// Whether further pages exist (may be stale under concurrent writes)
    pub is_next: bool,
    /// Total matches for the filter, ignoring pagination
    pub total_count: i32,
}

/// Sort direction for GraphQL
#[derive(Debug, Clone, Copy, GraphQLEnum)]
pub enum SortOrderData {
    Asc,
    Desc,
}

impl From<SortOrderData> for SortOrder {
    fn from(sort: SortOrderData) -> Self {
        match sort {
            SortOrderData::Asc => SortOrder::Asc,
            SortOrderData::Desc => SortOrder::Desc,
        }
    }
}
