use recipebox_db::table;
use recipebox_shared::{Ingredient, Nutrition};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Json};

const COLUMNS: [table::Ingredient; 6] = [
    table::Ingredient::Id,
    table::Ingredient::Name,
    table::Ingredient::Category,
    table::Ingredient::ServingSize,
    table::Ingredient::ServingUnit,
    table::Ingredient::Nutrition,
];

#[derive(FromRow)]
pub struct IngredientRow {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub serving_size: Option<f64>,
    pub serving_unit: Option<String>,
    pub nutrition: Option<Json<Nutrition>>,
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Ingredient {
            id: row.id,
            name: row.name,
            category: row.category,
            serving_size: row.serving_size,
            serving_unit: row.serving_unit,
            nutrition: row.nutrition.map(|n| n.0),
        }
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Catalog sorted by name.
    pub async fn all(&self) -> anyhow::Result<Vec<Ingredient>> {
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::Ingredient::Table)
            .order_by(table::Ingredient::Name, Order::Asc)
            .order_by(table::Ingredient::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Ingredient::from).collect())
    }

    pub async fn find(&self, id: i64) -> anyhow::Result<Option<Ingredient>> {
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::Ingredient::Table)
            .and_where(Expr::col(table::Ingredient::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .map(Ingredient::from))
    }
}
