use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CommunityId, UserId, ValidatedPageArgs};
use crate::domains::users::models::User;

/// Community model - SQL persistence layer
///
/// `external_id` is the identifier issued by the surrounding application
/// (e.g. its organization id); the API addresses communities by it.
/// Membership lives in the `community_members` relation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Community {
    pub id: CommunityId,
    pub external_id: String,
    pub name: String,
    pub username: String,
    pub image: String,
    pub bio: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Community {
    /// Find community by the identifier the surrounding application hands in
    pub async fn find_by_external_id(external_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        let community =
            sqlx::query_as::<_, Community>("SELECT * FROM communities WHERE external_id = $1")
                .bind(external_id)
                .fetch_optional(pool)
                .await?;
        Ok(community)
    }

    /// Insert this community
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let community = sqlx::query_as::<_, Community>(
            r#"
            INSERT INTO communities (
                id, external_id, name, username, image, bio, created_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.external_id)
        .bind(&self.name)
        .bind(&self.username)
        .bind(&self.image)
        .bind(&self.bio)
        .bind(self.created_by)
        .bind(self.created_at)
        .fetch_one(pool)
        .await?;
        Ok(community)
    }

    /// Fetch one directory page: case-insensitive name/handle filter,
    /// sorted by creation timestamp in the requested direction.
    ///
    /// The ORDER BY direction is interpolated from `SortOrder::as_sql`,
    /// never from user input.
    pub async fn find_page(args: &ValidatedPageArgs, pool: &PgPool) -> Result<Vec<Self>> {
        let query = format!(
            r#"
            SELECT * FROM communities
            WHERE ($1::text IS NULL OR name ILIKE $1 OR username ILIKE $1)
            ORDER BY created_at {}
            LIMIT $2 OFFSET $3
            "#,
            args.sort_by.as_sql()
        );

        let communities = sqlx::query_as::<_, Community>(&query)
            .bind(args.like_pattern())
            .bind(args.limit())
            .bind(args.offset())
            .fetch_all(pool)
            .await?;
        Ok(communities)
    }

    /// Count the communities matching the same filter as [`find_page`],
    /// ignoring pagination.
    ///
    /// [`find_page`]: Community::find_page
    pub async fn count_matching(args: &ValidatedPageArgs, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM communities
            WHERE ($1::text IS NULL OR name ILIKE $1 OR username ILIKE $1)
            "#,
        )
        .bind(args.like_pattern())
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Members of a community, in join order
    pub async fn members(community_id: CommunityId, pool: &PgPool) -> Result<Vec<User>> {
        let members = sqlx::query_as::<_, User>(
            r#"
            SELECT u.*
            FROM users u
            JOIN community_members cm ON cm.member_id = u.id
            WHERE cm.community_id = $1
            ORDER BY cm.joined_at ASC
            "#,
        )
        .bind(community_id)
        .fetch_all(pool)
        .await?;
        Ok(members)
    }

    /// Member lists for a batch of communities, grouped by community,
    /// each in join order. Communities without members are absent from
    /// the map.
    pub async fn members_by_community(
        community_ids: &[CommunityId],
        pool: &PgPool,
    ) -> Result<HashMap<CommunityId, Vec<User>>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT cm.community_id, u.*
            FROM users u
            JOIN community_members cm ON cm.member_id = u.id
            WHERE cm.community_id = ANY($1)
            ORDER BY cm.joined_at ASC
            "#,
        )
        .bind(community_ids)
        .fetch_all(pool)
        .await?;

        let mut grouped: HashMap<CommunityId, Vec<User>> = HashMap::new();
        for row in rows {
            grouped.entry(row.community_id).or_default().push(row.member);
        }
        Ok(grouped)
    }

    /// Whether a user is already a member
    pub async fn is_member(
        community_id: CommunityId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM community_members
                WHERE community_id = $1 AND member_id = $2
            )
            "#,
        )
        .bind(community_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Record a membership. One insert covers both directions the original
    /// document model stored separately.
    pub async fn add_member(
        community_id: CommunityId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query("INSERT INTO community_members (community_id, member_id) VALUES ($1, $2)")
            .bind(community_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Row shape of the batched member lookup: the membership's community
/// plus the joined user columns.
#[derive(sqlx::FromRow)]
struct MemberRow {
    community_id: CommunityId,
    #[sqlx(flatten)]
    member: User,
}
