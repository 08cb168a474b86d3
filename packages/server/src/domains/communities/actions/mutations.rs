//! Community mutation actions
//!
//! Write operations: create a community and add a member. Both resolve
//! referenced entities by external identifier and fail with `NotFound`
//! when a reference does not resolve.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};

use crate::common::CommunityId;
use crate::domains::communities::data::CommunityData;
use crate::domains::communities::error::CommunityError;
use crate::domains::communities::models::Community;
use crate::domains::users::models::User;

/// Create a community owned by an existing user.
///
/// The creator is recorded as the first member; the membership relation
/// carries what the original document model stored as mirrored reference
/// arrays on both entities.
pub async fn create_community(
    external_id: String,
    name: String,
    username: String,
    image: String,
    bio: String,
    created_by_id: String,
    pool: &PgPool,
) -> Result<CommunityData, CommunityError> {
    info!(community_id = %external_id, creator = %created_by_id, "Creating community");

    let result: Result<CommunityData, CommunityError> = async {
        let user = User::find_by_external_id(&created_by_id, pool)
            .await?
            .ok_or_else(|| CommunityError::NotFound {
                entity: "user",
                id: created_by_id.clone(),
            })?;

        let community = Community {
            id: CommunityId::new(),
            external_id,
            name,
            username,
            image,
            bio,
            created_by: user.id,
            created_at: Utc::now(),
        }
        .insert(pool)
        .await?;

        Community::add_member(community.id, user.id, pool).await?;

        let members = Community::members(community.id, pool).await?;
        Ok(CommunityData::assemble(community, members))
    }
    .await;

    result.inspect_err(|error| error!(%error, "Error creating community"))
}

/// Add a user to a community's member list.
///
/// Fails with `AlreadyMember` when the membership already exists; the
/// original treats this as a hard failure rather than a no-op, and that
/// behavior is preserved.
pub async fn add_member_to_community(
    community_id: &str,
    member_id: &str,
    pool: &PgPool,
) -> Result<CommunityData, CommunityError> {
    info!(
        community_id = community_id,
        member_id = member_id,
        "Adding member to community"
    );

    let result: Result<CommunityData, CommunityError> = async {
        let community = Community::find_by_external_id(community_id, pool)
            .await?
            .ok_or_else(|| CommunityError::NotFound {
                entity: "community",
                id: community_id.to_string(),
            })?;

        let user = User::find_by_external_id(member_id, pool)
            .await?
            .ok_or_else(|| CommunityError::NotFound {
                entity: "user",
                id: member_id.to_string(),
            })?;

        if Community::is_member(community.id, user.id, pool).await? {
            return Err(CommunityError::AlreadyMember {
                community_id: community.external_id,
                user_id: user.external_id,
            });
        }

        Community::add_member(community.id, user.id, pool).await?;

        let members = Community::members(community.id, pool).await?;
        Ok(CommunityData::assemble(community, members))
    }
    .await;

    result.inspect_err(|error| error!(%error, "Error adding member to community"))
}
