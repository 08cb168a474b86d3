use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CommunityId, ThreadId, UserId};

/// Thread model - SQL persistence layer
///
/// A top-level thread has `parent_id = NULL`; replies point at their parent.
/// `community_id` is NULL for threads posted outside any community.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Thread {
    pub id: ThreadId,
    pub text: String,
    pub author_id: UserId,
    pub community_id: Option<CommunityId>,
    pub parent_id: Option<ThreadId>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Thread {
    /// Find the top-level threads of a community, oldest first
    pub async fn find_top_level_for_community(
        community_id: CommunityId,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let threads = sqlx::query_as::<_, Thread>(
            r#"
            SELECT * FROM threads
            WHERE community_id = $1 AND parent_id IS NULL
            ORDER BY created_at ASC
            "#,
        )
        .bind(community_id)
        .fetch_all(pool)
        .await?;
        Ok(threads)
    }

    /// Batch-load the replies of a set of threads, oldest first
    pub async fn find_replies_for(parent_ids: &[ThreadId], pool: &PgPool) -> Result<Vec<Self>> {
        let replies = sqlx::query_as::<_, Thread>(
            "SELECT * FROM threads WHERE parent_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(parent_ids)
        .fetch_all(pool)
        .await?;
        Ok(replies)
    }

    /// Insert a new thread or reply
    pub async fn create(
        text: String,
        author_id: UserId,
        community_id: Option<CommunityId>,
        parent_id: Option<ThreadId>,
        pool: &PgPool,
    ) -> Result<Self> {
        let thread = sqlx::query_as::<_, Thread>(
            r#"
            INSERT INTO threads (id, text, author_id, community_id, parent_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(ThreadId::new())
        .bind(text)
        .bind(author_id)
        .bind(community_id)
        .bind(parent_id)
        .fetch_one(pool)
        .await?;
        Ok(thread)
    }
}
