#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tinylink::state::AppState;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO links (code, url, clicks, last_clicked_at, created_at, updated_at)
         VALUES (?, ?, 0, NULL, ?, ?)",
    )
    .bind(code)
    .bind(url)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn fetch_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_last_clicked_at(pool: &SqlitePool, code: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT last_clicked_at FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
