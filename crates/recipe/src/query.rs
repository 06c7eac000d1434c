use recipebox_db::table;
use recipebox_shared::{Nutrition, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Json};

pub(crate) const COLUMNS: [table::Recipe; 11] = [
    table::Recipe::Id,
    table::Recipe::Name,
    table::Recipe::Description,
    table::Recipe::PrepTime,
    table::Recipe::CookTime,
    table::Recipe::Servings,
    table::Recipe::Image,
    table::Recipe::Tags,
    table::Recipe::Ingredients,
    table::Recipe::Instructions,
    table::Recipe::Nutrition,
];

#[derive(FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub image: Option<String>,
    pub tags: Json<Vec<String>>,
    pub ingredients: Json<Vec<RecipeIngredient>>,
    pub instructions: Json<Vec<String>>,
    pub nutrition: Option<Json<Nutrition>>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            name: row.name,
            description: row.description,
            prep_time: row.prep_time,
            cook_time: row.cook_time,
            servings: row.servings,
            image: row.image,
            tags: row.tags.0,
            ingredients: row.ingredients.0,
            instructions: row.instructions.0,
            nutrition: row.nutrition.map(|n| n.0),
        }
    }
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Full catalog in id order.
    pub async fn all(&self) -> anyhow::Result<Vec<Recipe>> {
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::Recipe::Table)
            .order_by(table::Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    pub async fn find(&self, id: i64) -> anyhow::Result<Option<Recipe>> {
        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .map(Recipe::from))
    }

    /// Recipes matching `ids`, in id order. Unknown ids are skipped.
    pub async fn find_many(&self, ids: &[i64]) -> anyhow::Result<Vec<Recipe>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let statement = sea_query::Query::select()
            .columns(COLUMNS)
            .from(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Id).is_in(ids.iter().copied()))
            .order_by(table::Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}
