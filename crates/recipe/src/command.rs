use recipebox_db::table;
use recipebox_shared::{Recipe, RecipeInput};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder, Value};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::{RecipeError, RecipeResult};

#[derive(Clone)]
pub struct Command(pub sqlx::SqlitePool);

/// Column values for a recipe input, in [`WRITE_COLUMNS`] order.
fn column_values(input: &RecipeInput) -> RecipeResult<[Value; 10]> {
    let nutrition = input
        .nutrition
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    Ok([
        input.name.to_owned().into(),
        input.description.to_owned().into(),
        input.prep_time.into(),
        input.cook_time.into(),
        input.servings.into(),
        input.image.to_owned().into(),
        serde_json::to_string(&input.tags)?.into(),
        serde_json::to_string(&input.ingredients)?.into(),
        serde_json::to_string(&input.instructions)?.into(),
        nutrition.into(),
    ])
}

const WRITE_COLUMNS: [table::Recipe; 10] = [
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

impl Command {
    #[tracing::instrument(skip_all, fields(name = %input.name))]
    pub async fn create(&self, input: RecipeInput) -> RecipeResult<Recipe> {
        input.validate()?;

        let values = column_values(&input)?;
        let statement = sea_query::Query::insert()
            .into_table(table::Recipe::Table)
            .columns(WRITE_COLUMNS)
            .values_panic(values.map(Expr::from))
            .returning_col(table::Recipe::Id)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        tracing::info!(recipe = id, "recipe created");

        Ok(input.into_recipe(id))
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: RecipeInput) -> RecipeResult<Recipe> {
        input.validate()?;

        let values = column_values(&input)?;
        let statement = sea_query::Query::update()
            .table(table::Recipe::Table)
            .values(WRITE_COLUMNS.into_iter().zip(values.map(Expr::from)))
            .and_where(Expr::col(table::Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(RecipeError::NotFound);
        }

        Ok(input.into_recipe(id))
    }

    /// Deleting an unknown id is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> RecipeResult<()> {
        let statement = sea_query::Query::delete()
            .from_table(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
