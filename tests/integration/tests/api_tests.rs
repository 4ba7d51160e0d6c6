//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port with in-memory
//! storage, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = server().await;
    let response = server.get("/api/v1/works/quick-picks").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_then_dislike() {
    let server = server().await;
    let work = server.seed(published_work("flip")).await.unwrap();
    let token = server.token("fan-1", None).unwrap();
    let path = format!("/api/v1/works/{}/reactions", work.id);

    let response = server
        .post_auth(&path, &token, &SetReactionRequest::new("like"))
        .await
        .unwrap();
    let state: ReactionState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction.as_deref(), Some("like"));
    assert_eq!((state.likes_count, state.dislikes_count), (1, 0));

    let response = server
        .post_auth(&path, &token, &SetReactionRequest::new("dislike"))
        .await
        .unwrap();
    let state: ReactionState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction.as_deref(), Some("dislike"));
    assert_eq!((state.likes_count, state.dislikes_count), (0, 1));
}

#[tokio::test]
async fn test_like_twice_is_idempotent() {
    let server = server().await;
    let work = server.seed(published_work("idem")).await.unwrap();
    let token = server.token("fan-2", None).unwrap();
    let path = format!("/api/v1/works/{}/reactions", work.id);

    for _ in 0..2 {
        server
            .post_auth(&path, &token, &SetReactionRequest::new("like"))
            .await
            .unwrap();
    }

    let response = server.get(&path).await.unwrap();
    let state: ReactionState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.likes_count, 1);
    assert_eq!(state.reaction, None);
}

#[tokio::test]
async fn test_unknown_action_rejected() {
    let server = server().await;
    let work = server.seed(published_work("reject")).await.unwrap();
    let token = server.token("fan-3", None).unwrap();
    let path = format!("/api/v1/works/{}/reactions", work.id);

    server
        .post_auth(&path, &token, &SetReactionRequest::new("like"))
        .await
        .unwrap();

    let response = server
        .post_auth(&path, &token, &SetReactionRequest::new("superlike"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server.get_auth(&path, &token).await.unwrap();
    let state: ReactionState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction.as_deref(), Some("like"));
    assert_eq!(state.likes_count, 1);
}

#[tokio::test]
async fn test_reaction_on_missing_work() {
    let server = server().await;
    let token = server.token("fan-4", None).unwrap();
    let path = format!("/api/v1/works/{}/reactions", mastera_core::WorkId::new());

    let response = server
        .post_auth(&path, &token, &SetReactionRequest::new("like"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "WORK_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_work_id() {
    let server = server().await;
    let response = server.get("/api/v1/works/not-a-uuid/reactions").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_reaction_requires_auth() {
    let server = server().await;
    let work = server.seed(published_work("auth")).await.unwrap();
    let path = format!("/api/v1/works/{}/reactions", work.id);

    let response = server
        .post(&path, &SetReactionRequest::new("like"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");

    let response = server
        .post_auth(&path, "not.a.token", &SetReactionRequest::new("like"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Section Tests
// ============================================================================

#[tokio::test]
async fn test_trending_vs_new_releases() {
    let server = server().await;
    server.seed(work_with("A", 100, 1)).await.unwrap();
    server.seed(work_with("B", 50, 0)).await.unwrap();

    let response = server.get("/api/v1/sections/trending").await.unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(titles(&page.items), vec!["A", "B"]);

    let response = server.get("/api/v1/sections/new-releases").await.unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(titles(&page.items), vec!["B", "A"]);
}

#[tokio::test]
async fn test_section_pagination() {
    let server = server().await;
    for i in 0..25 {
        server.seed(work_with(&format!("w{i}"), i, 0)).await.unwrap();
    }

    let response = server
        .get("/api/v1/sections/trending?page=3&limit=10")
        .await
        .unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.pagination.page, 3);
    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_section_lenient_params() {
    let server = server().await;
    server.seed(work_with("only", 1, 0)).await.unwrap();

    let response = server
        .get("/api/v1/sections/unknown-section?page=abc&limit=lots&category=")
        .await
        .unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 20);
    assert_eq!(titles(&page.items), vec!["only"]);
}

#[tokio::test]
async fn test_popular_this_week_window() {
    let server = server().await;
    server.seed(work_with("fresh", 5, 3)).await.unwrap();
    server.seed(work_with("stale", 500, 9)).await.unwrap();

    let response = server.get("/api/v1/sections/popular-this-week").await.unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(titles(&page.items), vec!["fresh"]);
}

#[tokio::test]
async fn test_rising_creators_window() {
    let server = server().await;
    server.seed(work_with("recent", 10, 29)).await.unwrap();
    server.seed(work_with("expired", 1000, 31)).await.unwrap();

    let response = server.get("/api/v1/sections/rising-creators").await.unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(titles(&page.items), vec!["recent"]);
}

#[tokio::test]
async fn test_section_category_filter() {
    let server = server().await;
    let mut music = published_work("music");
    music.category = Some("music".to_string());
    music.tags = vec!["synth".to_string(), "live".to_string()];
    server.seed(music).await.unwrap();
    server.seed(published_work("other")).await.unwrap();

    let response = server
        .get("/api/v1/sections/trending?category=music")
        .await
        .unwrap();
    let page: PageBody<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(titles(&page.items), vec!["music"]);
    assert_eq!(page.items[0].tags, "synth,live");
}

// ============================================================================
// Quick Pick and Trending Tests
// ============================================================================

#[tokio::test]
async fn test_quick_picks_curation_flow() {
    let server = server().await;
    let admin = server.token("admin-1", Some("admin")).unwrap();

    let mut ids = Vec::new();
    for (title, age) in [("first", 3), ("second", 2), ("recent", 0)] {
        let work = server.seed(work_with(title, 0, age)).await.unwrap();
        ids.push(work.id);
    }

    for (id, order) in [(ids[1], Some(0)), (ids[0], Some(1)), (ids[2], None)] {
        let response = server
            .patch_auth(
                &format!("/api/v1/admin/works/{id}/quick-pick"),
                &admin,
                &UpdateQuickPickRequest {
                    quick_pick: true,
                    quick_pick_order: order,
                },
            )
            .await
            .unwrap();
        let work: WorkBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(work.quick_pick);
        assert_eq!(work.quick_pick_order, order);
    }

    let response = server.get("/api/v1/works/quick-picks?limit=5").await.unwrap();
    let picks: Vec<WorkBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(titles(&picks), vec!["second", "first", "recent"]);
}

#[tokio::test]
async fn test_curation_requires_admin() {
    let server = server().await;
    let work = server.seed(published_work("guarded")).await.unwrap();
    let token = server.token("fan-5", Some("editor")).unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/works/{}/quick-pick", work.id),
            &token,
            &UpdateQuickPickRequest {
                quick_pick: true,
                quick_pick_order: None,
            },
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "INSUFFICIENT_PERMISSIONS");
}

#[tokio::test]
async fn test_curation_rejects_negative_order() {
    let server = server().await;
    let work = server.seed(published_work("negative")).await.unwrap();
    let admin = server.token("admin-2", Some("admin")).unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/works/{}/quick-pick", work.id),
            &admin,
            &UpdateQuickPickRequest {
                quick_pick: true,
                quick_pick_order: Some(-3),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_trending_works_scores() {
    let server = server().await;
    let mut popular = published_work("popular");
    popular.downloads = 50;
    server.seed(popular).await.unwrap();
    let mut reviewed = published_work("reviewed");
    reviewed.rating = 4.0;
    reviewed.review_count = 10;
    server.seed(reviewed).await.unwrap();

    let response = server.get("/api/v1/works/trending?limit=2").await.unwrap();
    let works: Vec<TrendingWorkBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(works.len(), 2);
    assert_eq!(works[0].title, "popular");
    assert!((works[0].trending_score - 20.0).abs() < f64::EPSILON);
    assert_eq!(works[1].title, "reviewed");
    assert!((works[1].trending_score - 4.2).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_configured_admin_role() {
    let config = test_config(&[("AUTH_ADMIN_ROLE", "curator")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();
    let work = server.seed(published_work("curated")).await.unwrap();
    let curator = server.token("curator-1", Some("curator")).unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/works/{}/quick-pick", work.id),
            &curator,
            &UpdateQuickPickRequest {
                quick_pick: true,
                quick_pick_order: Some(0),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
