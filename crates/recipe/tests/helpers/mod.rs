#![allow(dead_code)]

use recipebox_shared::{Nutrition, RecipeIngredient, RecipeInput};
use std::path::PathBuf;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;

    let mut conn = pool.acquire().await?;
    recipebox_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(pool)
}

pub fn recipe_input(name: &str, ingredients: &[&str]) -> RecipeInput {
    RecipeInput {
        name: name.to_owned(),
        servings: Some(2),
        ingredients: ingredients
            .iter()
            .map(|name| RecipeIngredient::new(*name, 1.0, "pcs"))
            .collect(),
        instructions: vec!["Mix everything".to_owned()],
        ..Default::default()
    }
}

pub fn nutrition() -> Nutrition {
    Nutrition {
        calories: Some(450.0),
        protein: Some(25.0),
        carbohydrates: Some(60.0),
        fat: Some(12.0),
        fiber: Some(6.0),
        ..Default::default()
    }
}
