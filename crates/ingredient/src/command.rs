use recipebox_db::table;
use recipebox_shared::{Ingredient, IngredientInput};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder, Value};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::{IngredientError, IngredientResult};

const WRITE_COLUMNS: [table::Ingredient; 5] = [
    table::Ingredient::Name,
    table::Ingredient::Category,
    table::Ingredient::ServingSize,
    table::Ingredient::ServingUnit,
    table::Ingredient::Nutrition,
];

fn column_values(input: &IngredientInput) -> IngredientResult<[Value; 5]> {
    let nutrition = input
        .nutrition
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    Ok([
        input.name.to_owned().into(),
        input.category.to_owned().into(),
        input.serving_size.into(),
        input.serving_unit.to_owned().into(),
        nutrition.into(),
    ])
}

#[derive(Clone)]
pub struct Command(pub sqlx::SqlitePool);

impl Command {
    #[tracing::instrument(skip_all, fields(name = %input.name))]
    pub async fn create(&self, input: IngredientInput) -> IngredientResult<Ingredient> {
        input.validate()?;

        let values = column_values(&input)?;
        let statement = sea_query::Query::insert()
            .into_table(table::Ingredient::Table)
            .columns(WRITE_COLUMNS)
            .values_panic(values.map(Expr::from))
            .returning_col(table::Ingredient::Id)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        tracing::info!(ingredient = id, "ingredient created");

        Ok(input.into_ingredient(id))
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: IngredientInput) -> IngredientResult<Ingredient> {
        input.validate()?;

        let values = column_values(&input)?;
        let statement = sea_query::Query::update()
            .table(table::Ingredient::Table)
            .values(WRITE_COLUMNS.into_iter().zip(values.map(Expr::from)))
            .and_where(Expr::col(table::Ingredient::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(IngredientError::NotFound);
        }

        Ok(input.into_ingredient(id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> IngredientResult<()> {
        let statement = sea_query::Query::delete()
            .from_table(table::Ingredient::Table)
            .and_where(Expr::col(table::Ingredient::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
