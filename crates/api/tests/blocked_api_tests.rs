use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;
use zerospam_api::{create_api_routes, AppState, HtmlTableRenderer};
use zerospam_application::use_cases::{BlockedTable, TableSettings};
use zerospam_domain::EmptyResultPolicy;
use zerospam_infrastructure::{repositories::SqliteRowStore, security::HmacNonceVerifier};

const SECRET: &str = "test-secret";

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE blocked (
            blocked_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            key_type     TEXT NOT NULL DEFAULT 'ip',
            user_ip      TEXT NOT NULL,
            blocked_type TEXT NOT NULL DEFAULT 'temporary',
            start_block  TEXT,
            end_block    TEXT,
            date_added   TEXT NOT NULL,
            reason       TEXT
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO blocked (blocked_id, key_type, user_ip, blocked_type, start_block, end_block, date_added, reason) VALUES
         (3, 'ip', '192.0.2.3', 'temporary', '2024-03-01 10:00:00', '2024-04-01 10:00:00', '2024-03-01 10:00:00', 'Comment spam'),
         (7, 'ip', '192.0.2.7', 'permanent', '2024-03-02 11:30:00', '0000-00-00 00:00:00', '2024-03-02 11:30:00', 'Registration spam'),
         (9, 'ip', '198.51.100.9', 'temporary', '2024-03-03 08:15:00', '2024-03-10 08:15:00', '2024-03-03 08:15:00', NULL),
         (11, 'email', '203.0.113.11', 'temporary', '2024-03-04 09:00:00', NULL, '2024-03-04 09:00:00', 'Not an IP row')",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

async fn create_test_app_with(policy: EmptyResultPolicy) -> (Router, SqlitePool) {
    let pool = create_test_db().await;
    let nonces = Arc::new(HmacNonceVerifier::new(SECRET, 86_400));
    let table = BlockedTable::new(
        Arc::new(SqliteRowStore::new(pool.clone())),
        nonces.clone(),
        TableSettings {
            empty_result: policy,
            ..TableSettings::default()
        },
    );

    let state = AppState {
        blocked_table: Arc::new(table),
        renderer: Arc::new(HtmlTableRenderer::new()),
        nonces,
    };

    (create_api_routes(state), pool)
}

async fn create_test_app() -> (Router, SqlitePool) {
    create_test_app_with(EmptyResultPolicy::Skip).await
}

fn valid_nonce() -> String {
    use zerospam_application::ports::NonceIssuer;
    HmacNonceVerifier::new(SECRET, 86_400).issue("zerospam_nonce")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn remaining_ids(pool: &SqlitePool) -> Vec<i64> {
    sqlx::query_as::<_, (i64,)>("SELECT blocked_id FROM blocked ORDER BY blocked_id")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|(id,)| id)
        .collect()
}

fn post_form(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_get_renders_ip_rows_only() {
    // Arrange
    let (app, _pool) = create_test_app().await;

    // Act
    let response = app
        .oneshot(Request::get("/blocked").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<tr id="blocked-3">"#));
    assert!(html.contains(r#"<tr id="blocked-7">"#));
    assert!(html.contains(r#"<tr id="blocked-9">"#));
    assert!(!html.contains("203.0.113.11"));
    assert!(html.contains("3 items"));
    assert!(html.contains("Mar 2, 2024 11:30am"));
    assert!(html.contains(r#"name="zerospam_nonce""#));
    assert!(html.contains("Add Blocked IP Address"));
}

#[tokio::test]
async fn test_get_filters_by_type_and_ip() {
    // Arrange
    let (app, _pool) = create_test_app().await;

    // Act
    let response = app
        .oneshot(
            Request::get("/blocked?type=permanent&s=192.0.2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    let html = body_string(response).await;
    assert!(html.contains(r#"<tr id="blocked-7">"#));
    assert!(!html.contains(r#"<tr id="blocked-3">"#));
    assert!(html.contains("1 item<"));
}

#[tokio::test]
async fn test_get_with_no_matches_renders_without_pagination() {
    // Arrange
    let (app, _pool) = create_test_app().await;

    // Act
    let response = app
        .oneshot(
            Request::get("/blocked?s=10.9.9.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("No items found."));
    assert!(!html.contains("tablenav-pages"));
}

#[tokio::test]
async fn test_get_with_no_matches_publishes_zero_when_configured() {
    let (app, _pool) = create_test_app_with(EmptyResultPolicy::Publish).await;

    let response = app
        .oneshot(
            Request::get("/blocked?s=10.9.9.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("No items found."));
    assert!(html.contains("0 items"));
}

#[tokio::test]
async fn test_post_bulk_delete_with_valid_nonce() {
    // Arrange
    let (app, pool) = create_test_app().await;
    let body = format!(
        "zerospam_nonce={}&action=delete&ids%5B%5D=3&ids%5B%5D=7&action2=-1",
        valid_nonce()
    );

    // Act
    let response = app.oneshot(post_form("/blocked", body)).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(remaining_ids(&pool).await, vec![9, 11]);
    let html = body_string(response).await;
    assert!(!html.contains(r#"<tr id="blocked-3">"#));
    assert!(html.contains(r#"<tr id="blocked-9">"#));
}

#[tokio::test]
async fn test_post_bulk_delete_with_bad_nonce_is_ignored() {
    // Arrange
    let (app, pool) = create_test_app().await;
    let body = "zerospam_nonce=forged&action=delete&ids%5B%5D=3&ids%5B%5D=7".to_string();

    // Act
    let response = app.oneshot(post_form("/blocked", body)).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(remaining_ids(&pool).await, vec![3, 7, 9, 11]);
}

#[tokio::test]
async fn test_post_bottom_selector_triggers_delete() {
    let (app, pool) = create_test_app().await;
    let body = format!(
        "zerospam_nonce={}&action=-1&action2=delete&ids%5B%5D=9",
        valid_nonce()
    );

    app.oneshot(post_form("/blocked", body)).await.unwrap();

    assert_eq!(remaining_ids(&pool).await, vec![3, 7, 11]);
}

#[tokio::test]
async fn test_post_takes_selected_ids_from_body_only() {
    // Arrange
    let (app, pool) = create_test_app().await;
    let body = format!(
        "zerospam_nonce={}&action=delete&ids%5B%5D=9",
        valid_nonce()
    );

    // Act
    let response = app
        .oneshot(post_form("/blocked?ids%5B%5D=3&paged=1", body))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(remaining_ids(&pool).await, vec![3, 7, 11]);
}

#[tokio::test]
async fn test_health() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(r#""status":"ok""#));
}
