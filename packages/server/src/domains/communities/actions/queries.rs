//! Community query actions
//!
//! Read operations: single-community aggregates (details with creator and
//! members, posts with nested authors and replies) and the paginated
//! directory search.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::{error, info};

use crate::common::{CommunityId, PageArgs, ThreadId, UserId};
use crate::domains::communities::data::{
    CommunityConnection, CommunityData, CommunityDetailsData, CommunityPostsData,
};
use crate::domains::communities::error::CommunityError;
use crate::domains::communities::models::Community;
use crate::domains::threads::data::{ThreadAuthorData, ThreadData, ThreadReplyData};
use crate::domains::threads::models::Thread;
use crate::domains::users::models::User;

/// Fetch one community with its creator and member list resolved.
///
/// Returns `Ok(None)` when the identifier does not resolve.
pub async fn fetch_community_details(
    external_id: &str,
    pool: &PgPool,
) -> Result<Option<CommunityDetailsData>, CommunityError> {
    info!(community_id = external_id, "Fetching community details");

    let result: Result<Option<CommunityDetailsData>, CommunityError> = async {
        let Some(community) = Community::find_by_external_id(external_id, pool).await? else {
            return Ok(None);
        };

        let created_by = User::find_by_id(community.created_by, pool).await?;
        let members = Community::members(community.id, pool).await?;

        Ok(Some(CommunityDetailsData::assemble(
            community, created_by, members,
        )))
    }
    .await;

    result.inspect_err(|error| error!(%error, community_id = external_id, "Error fetching community details"))
}

/// Fetch one community with its threads resolved: each top-level thread with
/// its author, and each reply (one level deep) with its author.
///
/// Returns `Ok(None)` when the identifier does not resolve.
pub async fn fetch_community_posts(
    external_id: &str,
    pool: &PgPool,
) -> Result<Option<CommunityPostsData>, CommunityError> {
    info!(community_id = external_id, "Fetching community posts");

    let result: Result<Option<CommunityPostsData>, CommunityError> = async {
        let Some(community) = Community::find_by_external_id(external_id, pool).await? else {
            return Ok(None);
        };

        let threads = Thread::find_top_level_for_community(community.id, pool).await?;

        let parent_ids: Vec<ThreadId> = threads.iter().map(|t| t.id).collect();
        let replies = if parent_ids.is_empty() {
            Vec::new()
        } else {
            Thread::find_replies_for(&parent_ids, pool).await?
        };

        // Resolve every author in one round trip
        let mut author_ids: Vec<UserId> = threads
            .iter()
            .chain(replies.iter())
            .map(|t| t.author_id)
            .collect();
        author_ids.sort();
        author_ids.dedup();

        let authors: HashMap<UserId, User> = User::find_by_ids(&author_ids, pool)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut replies_by_parent: HashMap<ThreadId, Vec<ThreadReplyData>> = HashMap::new();
        for reply in replies {
            let Some(parent_id) = reply.parent_id else {
                continue;
            };
            let author = resolve_author(&authors, reply.author_id)?;
            replies_by_parent
                .entry(parent_id)
                .or_default()
                .push(ThreadReplyData {
                    id: reply.id.into_uuid(),
                    text: reply.text,
                    author,
                    created_at: reply.created_at,
                });
        }

        let mut resolved = Vec::with_capacity(threads.len());
        for thread in threads {
            let author = resolve_author(&authors, thread.author_id)?;
            resolved.push(ThreadData {
                id: thread.id.into_uuid(),
                text: thread.text,
                author,
                created_at: thread.created_at,
                replies: replies_by_parent.remove(&thread.id).unwrap_or_default(),
            });
        }

        Ok(Some(CommunityPostsData::assemble(community, resolved)))
    }
    .await;

    result.inspect_err(|error| error!(%error, community_id = external_id, "Error fetching community posts"))
}

/// Search the community directory: case-insensitive substring match on name
/// or handle, sorted by creation timestamp, one page at a time. Every row
/// carries its resolved member list, fetched in one batch for the page.
///
/// The page fetch and the total count are two independent queries, so
/// `is_next` can be stale under concurrent writes.
pub async fn fetch_communities(
    args: &PageArgs,
    pool: &PgPool,
) -> Result<CommunityConnection, CommunityError> {
    let validated = args.validate();
    info!(
        page = validated.page_number,
        search = validated.search.as_deref().unwrap_or(""),
        "Searching community directory"
    );

    let result: Result<CommunityConnection, CommunityError> = async {
        let communities = Community::find_page(&validated, pool).await?;
        let total_count = Community::count_matching(&validated, pool).await?;

        let ids: Vec<CommunityId> = communities.iter().map(|c| c.id).collect();
        let mut members = Community::members_by_community(&ids, pool).await?;

        let is_next = validated.has_next(total_count, communities.len());

        Ok(CommunityConnection {
            communities: communities
                .into_iter()
                .map(|community| {
                    let community_members = members.remove(&community.id).unwrap_or_default();
                    CommunityData::assemble(community, community_members)
                })
                .collect(),
            is_next,
            total_count: total_count as i32,
        })
    }
    .await;

    result.inspect_err(|error| error!(%error, "Error fetching communities"))
}

/// Look up a resolved author; membership of the map is guaranteed by the
/// foreign key, so a miss is a storage-level inconsistency.
fn resolve_author(
    authors: &HashMap<UserId, User>,
    author_id: UserId,
) -> Result<ThreadAuthorData, CommunityError> {
    authors
        .get(&author_id)
        .cloned()
        .map(ThreadAuthorData::from)
        .ok_or_else(|| anyhow::anyhow!("author row missing for user {author_id}").into())
}
