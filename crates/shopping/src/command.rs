use recipebox_db::table;
use recipebox_shared::{Recipe, ShoppingList, ShoppingListInput};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::merge::merge_selection;
use crate::{ShoppingListError, ShoppingListResult};

#[derive(Clone)]
pub struct Command(pub sqlx::SqlitePool);

impl Command {
    /// Creates a list from `input` and records its recipe links. Items are
    /// built from the selected recipes only when `input.items` is empty.
    /// `recipes` must hold every selected recipe.
    #[tracing::instrument(skip_all, fields(name = %input.name, selected = input.recipes.len()))]
    pub async fn create(
        &self,
        input: ShoppingListInput,
        recipes: &[Recipe],
    ) -> ShoppingListResult<ShoppingList> {
        input.validate()?;

        let items = merge_selection(input.items, &input.recipes, recipes)?;

        let mut tx = self.0.begin().await?;

        let statement = sea_query::Query::insert()
            .into_table(table::ShoppingList::Table)
            .columns([table::ShoppingList::Name, table::ShoppingList::Items])
            .values_panic([
                input.name.to_owned().into(),
                serde_json::to_string(&items)?.into(),
            ])
            .returning_col(table::ShoppingList::Id)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&mut *tx)
            .await?;

        if !input.recipes.is_empty() {
            let mut statement = sea_query::Query::insert()
                .into_table(table::ShoppingListRecipe::Table)
                .columns([
                    table::ShoppingListRecipe::ShoppingListId,
                    table::ShoppingListRecipe::RecipeId,
                    table::ShoppingListRecipe::Servings,
                ])
                .to_owned();

            for selected in &input.recipes {
                statement.values_panic([
                    id.into(),
                    selected.id.into(),
                    selected.servings.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(list = id, items = items.len(), "shopping list created");

        Ok(ShoppingList {
            id,
            name: input.name,
            items,
        })
    }

    /// Replaces name and items. Recipe links are left untouched.
    #[tracing::instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i64,
        input: ShoppingListInput,
    ) -> ShoppingListResult<ShoppingList> {
        input.validate()?;

        let statement = sea_query::Query::update()
            .table(table::ShoppingList::Table)
            .values([
                (table::ShoppingList::Name, input.name.to_owned().into()),
                (
                    table::ShoppingList::Items,
                    serde_json::to_string(&input.items)?.into(),
                ),
            ])
            .and_where(Expr::col(table::ShoppingList::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(ShoppingListError::NotFound);
        }

        Ok(ShoppingList {
            id,
            name: input.name,
            items: input.items,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ShoppingListResult<()> {
        let statement = sea_query::Query::delete()
            .from_table(table::ShoppingList::Table)
            .and_where(Expr::col(table::ShoppingList::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
