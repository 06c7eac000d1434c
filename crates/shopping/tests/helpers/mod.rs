#![allow(dead_code)]

use recipebox_shared::{Recipe, RecipeIngredient, RecipeInput, ShoppingItem, ShoppingListInput};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    let mut conn = pool.acquire().await?;
    recipebox_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(pool)
}

pub async fn create_recipe(
    pool: &SqlitePool,
    name: &str,
    servings: u32,
    ingredients: &[(&str, f64, &str)],
) -> anyhow::Result<Recipe> {
    let input = RecipeInput {
        name: name.to_owned(),
        servings: Some(servings),
        ingredients: ingredients
            .iter()
            .map(|(name, quantity, unit)| RecipeIngredient::new(*name, *quantity, *unit))
            .collect(),
        ..Default::default()
    };

    Ok(recipebox_recipe::Command(pool.clone()).create(input).await?)
}

pub fn list_input(name: &str, items: &[&str]) -> ShoppingListInput {
    ShoppingListInput {
        name: name.to_owned(),
        items: items
            .iter()
            .map(|name| ShoppingItem::new(*name, 1.0, "pcs"))
            .collect(),
        recipes: vec![],
    }
}
