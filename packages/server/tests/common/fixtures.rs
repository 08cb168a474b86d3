//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use chrono::{DateTime, Utc};
use server_core::common::CommunityId;
use server_core::domains::communities::models::Community;
use server_core::domains::threads::models::Thread;
use server_core::domains::users::models::User;
use sqlx::PgPool;

/// Create a test user
pub async fn create_test_user(
    pool: &PgPool,
    external_id: &str,
    name: &str,
    username: &str,
) -> Result<User> {
    User::create(
        external_id.to_string(),
        name.to_string(),
        username.to_string(),
        Some(format!("https://img.example/{}.png", username)),
        pool,
    )
    .await
}

/// Create a test community with a controlled creation timestamp.
///
/// Inserts the row directly so directory sort tests can pin the ordering.
/// Does NOT record a membership for the creator; use the create action
/// when that behavior is under test.
pub async fn create_test_community(
    pool: &PgPool,
    external_id: &str,
    name: &str,
    username: &str,
    creator: &User,
    created_at: DateTime<Utc>,
) -> Result<Community> {
    Community {
        id: CommunityId::new(),
        external_id: external_id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        image: format!("https://img.example/{}.png", username),
        bio: format!("{} bio", name),
        created_by: creator.id,
        created_at,
    }
    .insert(pool)
    .await
}

/// Create a top-level thread inside a community
pub async fn create_test_thread(
    pool: &PgPool,
    text: &str,
    author: &User,
    community: &Community,
) -> Result<Thread> {
    Thread::create(text.to_string(), author.id, Some(community.id), None, pool).await
}

/// Create a reply to an existing thread
pub async fn create_test_reply(
    pool: &PgPool,
    text: &str,
    author: &User,
    parent: &Thread,
) -> Result<Thread> {
    Thread::create(
        text.to_string(),
        author.id,
        parent.community_id,
        Some(parent.id),
        pool,
    )
    .await
}
