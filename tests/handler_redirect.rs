mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use tinylink::api::handlers::redirect_handler;

/// Build a test server with only the redirect route.
fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "redir01", "https://example.com/target").await;

    let server = make_server(pool.clone());

    let response = server.get("/redir01").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");

    assert_eq!(common::fetch_clicks(&pool, "redir01").await, 1);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/nothere").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["code"], "nothere");
}

#[sqlx::test]
async fn test_redirect_increments_clicks(pool: SqlitePool) {
    common::create_test_link(&pool, "clicky1", "https://example.com").await;

    let server = make_server(pool.clone());

    server.get("/clicky1").await.assert_status(StatusCode::TEMPORARY_REDIRECT);
    let first = common::fetch_last_clicked_at(&pool, "clicky1").await.unwrap();

    for _ in 0..4 {
        server
            .get("/clicky1")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    assert_eq!(common::fetch_clicks(&pool, "clicky1").await, 5);

    let last = common::fetch_last_clicked_at(&pool, "clicky1").await.unwrap();
    assert!(last >= first);
}

#[sqlx::test]
async fn test_redirect_sets_last_clicked_at(pool: SqlitePool) {
    common::create_test_link(&pool, "visit01", "https://example.com").await;

    assert!(common::fetch_last_clicked_at(&pool, "visit01").await.is_none());

    let server = make_server(pool.clone());
    server.get("/visit01").await.assert_status(StatusCode::TEMPORARY_REDIRECT);

    assert!(common::fetch_last_clicked_at(&pool, "visit01").await.is_some());
}

#[sqlx::test]
async fn test_redirect_case_sensitive(pool: SqlitePool) {
    common::create_test_link(&pool, "CaseABC", "https://example.com/exact").await;

    let server = make_server(pool.clone());

    // Lookup is byte-exact; a lowercased code is a different, unknown code.
    server.get("/caseabc").await.assert_status_not_found();

    let response = server.get("/CaseABC").await;
    assert_eq!(response.status_code(), 307);

    assert_eq!(common::fetch_clicks(&pool, "CaseABC").await, 1);
}

#[sqlx::test]
async fn test_concurrent_visits_all_counted(pool: SqlitePool) {
    common::create_test_link(&pool, "parall1", "https://example.com").await;

    let state = common::create_test_state(pool.clone());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let redirect_service = state.redirect_service.clone();
        handles.push(tokio::spawn(async move {
            redirect_service.resolve_and_record("parall1").await
        }));
    }

    for handle in handles {
        let url = handle.await.unwrap().unwrap();
        assert_eq!(url, "https://example.com");
    }

    // Every visit lands as exactly one increment, none lost.
    assert_eq!(common::fetch_clicks(&pool, "parall1").await, 20);
}

#[sqlx::test]
async fn test_generated_code_lifecycle(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", tinylink::api::routes::routes())
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    // Create with no code; the service picks a 6-character one.
    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/article" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let body = created.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert_eq!(body["clicks"], 0);

    for _ in 0..3 {
        server
            .get(&format!("/{code}"))
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let detail = server.get(&format!("/api/links/{code}")).await;
    assert_eq!(detail.json::<serde_json::Value>()["clicks"], 3);

    server
        .delete(&format!("/api/links/{code}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get(&format!("/{code}")).await.assert_status_not_found();
}

#[sqlx::test]
async fn test_custom_code_lifecycle(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", tinylink::api::routes::routes())
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    // Create with a caller-chosen code.
    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/life", "code": "Life001" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    // Visit it three times.
    for _ in 0..3 {
        let response = server.get("/Life001").await;
        assert_eq!(response.status_code(), 307);
        assert_eq!(response.header("location"), "https://example.com/life");
    }

    // Accounting is visible in the detail view.
    let detail = server.get("/api/links/Life001").await;
    detail.assert_status_ok();
    let body = detail.json::<serde_json::Value>();
    assert_eq!(body["clicks"], 3);
    assert!(body["lastClickedAt"].is_string());

    // Delete, then both resolution and detail lookup miss.
    server
        .delete("/api/links/Life001")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get("/Life001").await.assert_status_not_found();
    server.get("/api/links/Life001").await.assert_status_not_found();
}
