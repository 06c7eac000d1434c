#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use recipebox::config::{
    Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SuggestionsConfig,
};
use recipebox::{AppState, db, router};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        suggestions: SuggestionsConfig::default(),
    }
}

/// App backed by a migrated in-memory database shared by reads and writes.
pub async fn setup_app(config: Config) -> anyhow::Result<Router> {
    let pool = db::create_pool("sqlite::memory:", 1).await?;
    db::migrate(&pool).await?;

    Ok(router(AppState::new(config, pool.clone(), pool)))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::DELETE, uri, None).await
}

/// Creates a recipe and returns its id.
pub async fn create_recipe(app: &Router, body: Value) -> anyhow::Result<i64> {
    let (status, recipe) = post(app, "/api/recipes", body).await?;
    assert_eq!(status, StatusCode::OK, "{recipe}");

    recipe["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("recipe without id: {recipe}"))
}

/// Creates a shopping list and returns its id.
pub async fn create_list(app: &Router, body: Value) -> anyhow::Result<i64> {
    let (status, list) = post(app, "/api/shopping-lists", body).await?;
    assert_eq!(status, StatusCode::OK, "{list}");

    list["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("list without id: {list}"))
}
