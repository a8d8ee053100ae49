//! Integration tests for the `/projects` resource.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_json, get, post_empty, post_json};
use serde_json::json;
use sqlx::PgPool;

fn portfolio_entry(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "A portfolio entry",
        "technology": "Rust, Axum, PostgreSQL",
        "category": "Web"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_starts_empty(pool: PgPool) {
    let app = build_test_app(pool);

    let listed = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_list(pool: PgPool) {
    let app = build_test_app(pool);

    let created = expect_json(
        post_json(app.clone(), "/api/v1/projects", portfolio_entry("CLI Tool")).await,
        StatusCode::CREATED,
    )
    .await;
    assert!(created["id"].is_i64());
    assert_eq!(created["title"], "CLI Tool");
    assert!(created["featured"].is_null());

    let listed = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_accepts_optional_fields(pool: PgPool) {
    let app = build_test_app(pool);

    let body = json!({
        "title": "Side Project",
        "description": "With all the trimmings",
        "technology": "Rust",
        "category": "Web",
        "featured": true,
        "github_url": "https://github.com/example/side-project",
        "live_url": "https://side.example.com",
        "image_url": "🛠️"
    });
    let created = expect_json(
        post_json(app, "/api/v1/projects", body).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["featured"], true);
    assert_eq!(created["github_url"], "https://github.com/example/side-project");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_missing_required_field(pool: PgPool) {
    let app = build_test_app(pool);

    let body = json!({
        "title": "No category",
        "description": "Missing a required field",
        "technology": "Rust",
        "category": ""
    });
    let rejected = expect_json(
        post_json(app.clone(), "/api/v1/projects", body).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(rejected["code"], "VALIDATION_ERROR");

    let listed = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_titles_are_permitted(pool: PgPool) {
    let app = build_test_app(pool);

    for _ in 0..2 {
        let response = post_json(app.clone(), "/api/v1/projects", portfolio_entry("Twin")).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn seed_endpoint_is_idempotent(pool: PgPool) {
    let app = build_test_app(pool);

    let first = expect_json(
        post_empty(app.clone(), "/api/v1/projects/seed").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(first["status"], "Projects seeded successfully");

    let after_first = expect_json(get(app.clone(), "/api/v1/projects").await, StatusCode::OK).await;
    let count_after_first = after_first.as_array().unwrap().len();
    assert!(count_after_first > 0);

    let second = expect_json(
        post_empty(app.clone(), "/api/v1/projects/seed").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(second["status"], "Projects already seeded");

    let after_second = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    assert_eq!(after_second.as_array().unwrap().len(), count_after_first);
}
