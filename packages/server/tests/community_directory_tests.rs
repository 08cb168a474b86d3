//! Integration tests for the community directory search.
//!
//! Covers the paginated, filtered directory: case-insensitive matching on
//! name and handle, page math, sort direction, and the is-next signal.

mod common;

use crate::common::{create_test_community, create_test_user, TestHarness};
use chrono::{Duration, Utc};
use server_core::common::{PageArgs, SortOrder};
use server_core::domains::communities::actions::fetch_communities;
use server_core::domains::communities::models::Community;
use server_core::domains::users::models::User;
use test_context::test_context;

/// Seed three communities with pinned creation timestamps:
/// "Alpha Labs" (oldest), "Beta Alpha", "Gamma Crew" (newest).
/// No membership rows are created.
async fn seed_directory(ctx: &TestHarness) -> (User, Vec<Community>) {
    let creator = create_test_user(&ctx.db_pool, "user_creator", "Creator", "creator")
        .await
        .unwrap();

    let base = Utc::now() - Duration::minutes(30);
    let mut communities = Vec::new();
    for (i, (external_id, name, username)) in [
        ("org_alpha", "Alpha Labs", "alphalabs"),
        ("org_beta", "Beta Alpha", "betaalpha"),
        ("org_gamma", "Gamma Crew", "gammacrew"),
    ]
    .into_iter()
    .enumerate()
    {
        let community = create_test_community(
            &ctx.db_pool,
            external_id,
            name,
            username,
            &creator,
            base + Duration::minutes(i as i64),
        )
        .await
        .unwrap();
        communities.push(community);
    }
    (creator, communities)
}

fn names(connection: &server_core::domains::communities::data::CommunityConnection) -> Vec<&str> {
    connection
        .communities
        .iter()
        .map(|c| c.name.as_str())
        .collect()
}

/// Searching "alpha" matches "Alpha Labs" by name and "Beta Alpha" by name,
/// case-insensitively, and reports no further pages.
#[test_context(TestHarness)]
#[tokio::test]
async fn search_matches_name_case_insensitively(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: Some("alpha".to_string()),
        page_number: None,
        page_size: None,
        sort_by: Some(SortOrder::Asc),
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(names(&page), vec!["Alpha Labs", "Beta Alpha"]);
    assert_eq!(page.total_count, 2);
    assert!(!page.is_next);

    // Uppercase input matches the same rows
    let args = PageArgs {
        search_string: Some("ALPHA".to_string()),
        page_number: None,
        page_size: None,
        sort_by: Some(SortOrder::Asc),
    };
    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();
    assert_eq!(page.total_count, 2);
}

/// The filter also matches the handle, not just the display name.
#[test_context(TestHarness)]
#[tokio::test]
async fn search_matches_handle(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: Some("gammac".to_string()),
        page_number: None,
        page_size: None,
        sort_by: None,
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(names(&page), vec!["Gamma Crew"]);
}

/// Page 2 of size 1 over 3 communities, newest first: the middle one comes
/// back and a further page is reported.
#[test_context(TestHarness)]
#[tokio::test]
async fn second_page_of_one_newest_first(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: None,
        page_number: Some(2),
        page_size: Some(1),
        sort_by: Some(SortOrder::Desc),
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(names(&page), vec!["Beta Alpha"]);
    assert_eq!(page.total_count, 3);
    assert!(page.is_next);
}

/// An absent or whitespace-only search string matches everything.
#[test_context(TestHarness)]
#[tokio::test]
async fn missing_or_blank_search_matches_everything(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: None,
        page_number: None,
        page_size: None,
        sort_by: None,
    };
    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();
    assert_eq!(page.communities.len(), 3);
    assert!(!page.is_next);

    let args = PageArgs {
        search_string: Some("   ".to_string()),
        page_number: None,
        page_size: None,
        sort_by: None,
    };
    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();
    assert_eq!(page.communities.len(), 3);
}

/// A page never carries more rows than the requested page size.
#[test_context(TestHarness)]
#[tokio::test]
async fn page_never_exceeds_page_size(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: None,
        page_number: Some(1),
        page_size: Some(2),
        sort_by: None,
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(page.communities.len(), 2);
    assert_eq!(page.total_count, 3);
    assert!(page.is_next);
}

/// A page past the end of the result set is empty and reports no next page.
#[test_context(TestHarness)]
#[tokio::test]
async fn page_past_the_end_is_empty(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: None,
        page_number: Some(5),
        page_size: Some(2),
        sort_by: None,
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert!(page.communities.is_empty());
    assert!(!page.is_next);
}

/// Every directory row carries its resolved member list.
#[test_context(TestHarness)]
#[tokio::test]
async fn directory_rows_carry_member_lists(ctx: &TestHarness) {
    let (creator, communities) = seed_directory(ctx).await;
    Community::add_member(communities[0].id, creator.id, &ctx.db_pool)
        .await
        .unwrap();

    let args = PageArgs {
        search_string: None,
        page_number: None,
        page_size: None,
        sort_by: Some(SortOrder::Asc),
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(page.communities[0].name, "Alpha Labs");
    let member_ids: Vec<&str> = page.communities[0]
        .members
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(member_ids, vec!["user_creator"]);

    // The other rows have no memberships and resolve to empty lists
    assert!(page.communities[1].members.is_empty());
    assert!(page.communities[2].members.is_empty());
}

/// The default sort direction is newest first.
#[test_context(TestHarness)]
#[tokio::test]
async fn default_sort_is_newest_first(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: None,
        page_number: None,
        page_size: None,
        sort_by: None,
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(names(&page), vec!["Gamma Crew", "Beta Alpha", "Alpha Labs"]);
}

/// Ascending sort returns oldest first.
#[test_context(TestHarness)]
#[tokio::test]
async fn ascending_sort_is_oldest_first(ctx: &TestHarness) {
    seed_directory(ctx).await;

    let args = PageArgs {
        search_string: None,
        page_number: None,
        page_size: None,
        sort_by: Some(SortOrder::Asc),
    };

    let page = fetch_communities(&args, &ctx.db_pool).await.unwrap();

    assert_eq!(names(&page), vec!["Alpha Labs", "Beta Alpha", "Gamma Crew"]);
}

/// The whole directory query through the GraphQL layer, filter and
/// pagination arguments included.
#[test_context(TestHarness)]
#[tokio::test]
async fn graphql_directory_query(ctx: &TestHarness) {
    let (creator, communities) = seed_directory(ctx).await;
    Community::add_member(communities[0].id, creator.id, &ctx.db_pool)
        .await
        .unwrap();
    let client = ctx.graphql();

    let query = r#"
        query SearchCommunities {
            communities(searchString: "alpha", pageSize: 1, sortBy: ASC) {
                communities {
                    id
                    name
                    username
                    members {
                        id
                        username
                    }
                }
                isNext
                totalCount
            }
        }
    "#;

    let result = client.query(query).await;

    let communities = result["communities"]["communities"].as_array().unwrap();
    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0]["name"].as_str().unwrap(), "Alpha Labs");
    assert_eq!(communities[0]["id"].as_str().unwrap(), "org_alpha");

    let members = communities[0]["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["id"].as_str().unwrap(), "user_creator");

    assert!(result["communities"]["isNext"].as_bool().unwrap());
    assert_eq!(result["communities"]["totalCount"].as_i64().unwrap(), 2);
}
