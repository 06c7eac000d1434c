mod ingredient;
mod recipe;
mod shopping_list;
mod shopping_list_recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recipebox",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        ingredient::CreateTable,
        ingredient::CreateIdx1,
        shopping_list::CreateTable,
        shopping_list_recipe::CreateTable,
        shopping_list_recipe::CreateIdx1
    ]
);
