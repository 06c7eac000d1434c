use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::Config;

mod health;
mod ingredients;
mod recipes;
mod shopping_lists;
mod suggestions;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub recipe_command: recipebox_recipe::Command,
    pub recipe_query: recipebox_recipe::Query,
    pub shopping_command: recipebox_shopping::Command,
    pub shopping_query: recipebox_shopping::Query,
    pub ingredient_command: recipebox_ingredient::Command,
    pub ingredient_query: recipebox_ingredient::Query,
    pub pool: SqlitePool,
}

impl AppState {
    /// Writes go through `write_pool`, reads through `read_pool`.
    pub fn new(config: Config, write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            config,
            recipe_command: recipebox_recipe::Command(write_pool.clone()),
            recipe_query: recipebox_recipe::Query(read_pool.clone()),
            shopping_command: recipebox_shopping::Command(write_pool.clone()),
            shopping_query: recipebox_shopping::Query(read_pool.clone()),
            ingredient_command: recipebox_ingredient::Command(write_pool),
            ingredient_query: recipebox_ingredient::Query(read_pool.clone()),
            pool: read_pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/recipes", get(recipes::index).post(recipes::create))
        .route(
            "/api/recipes/{id}",
            get(recipes::show)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/api/ingredients",
            get(ingredients::index).post(ingredients::create),
        )
        .route(
            "/api/ingredients/{id}",
            get(ingredients::show)
                .put(ingredients::update)
                .delete(ingredients::delete),
        )
        .route(
            "/api/shopping-lists",
            get(shopping_lists::index).post(shopping_lists::create),
        )
        .route(
            "/api/shopping-lists/{id}",
            get(shopping_lists::show)
                .put(shopping_lists::update)
                .delete(shopping_lists::delete),
        )
        .route(
            "/api/shopping-lists/{id}/recipes",
            get(shopping_lists::recipes),
        )
        .route(
            "/api/shopping-lists/{id}/suggestions",
            get(suggestions::index),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
