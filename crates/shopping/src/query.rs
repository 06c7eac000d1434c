use recipebox_db::table;
use recipebox_shared::{SelectedRecipe, ShoppingItem, ShoppingList};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Json};

#[derive(FromRow)]
pub struct ShoppingListRow {
    pub id: i64,
    pub name: String,
    pub items: Json<Vec<ShoppingItem>>,
}

impl From<ShoppingListRow> for ShoppingList {
    fn from(row: ShoppingListRow) -> Self {
        ShoppingList {
            id: row.id,
            name: row.name,
            items: row.items.0,
        }
    }
}

#[derive(FromRow)]
struct LinkRow {
    recipe_id: i64,
    servings: u32,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn all(&self) -> anyhow::Result<Vec<ShoppingList>> {
        let statement = sea_query::Query::select()
            .columns([
                table::ShoppingList::Id,
                table::ShoppingList::Name,
                table::ShoppingList::Items,
            ])
            .from(table::ShoppingList::Table)
            .order_by(table::ShoppingList::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, ShoppingListRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(ShoppingList::from).collect())
    }

    pub async fn find(&self, id: i64) -> anyhow::Result<Option<ShoppingList>> {
        let statement = sea_query::Query::select()
            .columns([
                table::ShoppingList::Id,
                table::ShoppingList::Name,
                table::ShoppingList::Items,
            ])
            .from(table::ShoppingList::Table)
            .and_where(Expr::col(table::ShoppingList::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingListRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .map(ShoppingList::from))
    }

    /// Recipes selected when the list was created, in selection order.
    pub async fn recipes(&self, list_id: i64) -> anyhow::Result<Vec<SelectedRecipe>> {
        let statement = sea_query::Query::select()
            .columns([
                table::ShoppingListRecipe::RecipeId,
                table::ShoppingListRecipe::Servings,
            ])
            .from(table::ShoppingListRecipe::Table)
            .and_where(Expr::col(table::ShoppingListRecipe::ShoppingListId).eq(list_id))
            .order_by(table::ShoppingListRecipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, LinkRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| SelectedRecipe {
                id: row.recipe_id,
                servings: row.servings,
            })
            .collect())
    }
}
