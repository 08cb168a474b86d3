//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};

// Common types
use crate::common::PageArgs;

// Domain actions
use crate::domains::communities::actions as community_actions;

// Domain data types (GraphQL types)
use crate::domains::communities::data::{
    CommunityConnection, CommunityData, CommunityDetailsData, CommunityPostsData, SortOrderData,
};
use crate::domains::communities::error::CommunityError;

// =============================================================================
// Helper functions
// =============================================================================

/// Convert a domain error to a juniper FieldError for thin resolvers
fn to_field_error(e: CommunityError) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Get one community with its creator and members resolved
    async fn community(
        ctx: &GraphQLContext,
        id: String,
    ) -> FieldResult<Option<CommunityDetailsData>> {
        community_actions::fetch_community_details(&id, &ctx.pool)
            .await
            .map_err(to_field_error)
    }

    /// Get one community with its threads resolved (authors and replies)
    async fn community_posts(
        ctx: &GraphQLContext,
        id: String,
    ) -> FieldResult<Option<CommunityPostsData>> {
        community_actions::fetch_community_posts(&id, &ctx.pool)
            .await
            .map_err(to_field_error)
    }

    /// Search the community directory, one page at a time
    ///
    /// Arguments:
    /// - searchString: case-insensitive substring match on name or handle
    /// - pageNumber: 1-based page number (default 1)
    /// - pageSize: items per page (default 20, max 100)
    /// - sortBy: sort direction for the creation timestamp (default DESC)
    async fn communities(
        ctx: &GraphQLContext,
        search_string: Option<String>,
        page_number: Option<i32>,
        page_size: Option<i32>,
        sort_by: Option<SortOrderData>,
    ) -> FieldResult<CommunityConnection> {
        let args = PageArgs {
            search_string,
            page_number,
            page_size,
            sort_by: sort_by.map(Into::into),
        };

        community_actions::fetch_communities(&args, &ctx.pool)
            .await
            .map_err(to_field_error)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create a community owned by an existing user
    async fn create_community(
        ctx: &GraphQLContext,
        id: String,
        name: String,
        username: String,
        image: String,
        bio: String,
        created_by_id: String,
    ) -> FieldResult<CommunityData> {
        community_actions::create_community(id, name, username, image, bio, created_by_id, &ctx.pool)
            .await
            .map_err(to_field_error)
    }

    /// Add a user to a community's member list
    ///
    /// Fails when the user is already a member.
    async fn add_member_to_community(
        ctx: &GraphQLContext,
        community_id: String,
        member_id: String,
    ) -> FieldResult<CommunityData> {
        community_actions::add_member_to_community(&community_id, &member_id, &ctx.pool)
            .await
            .map_err(to_field_error)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
