use foodgram_db::table::Recipe;
use foodgram_shared::recipe::IngredientAmount;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use validator::Validate;

use super::validate_ingredients;
use crate::repository;

#[derive(Validate, Clone)]
pub struct UpdateInput {
    pub id: String,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(range(min = 1))]
    pub cooking_time: u32,
    #[validate(custom(function = "validate_ingredients"))]
    pub ingredients: Vec<IngredientAmount>,
}

impl super::Command {
    /// Replaces the recipe fields and its whole ingredient list.
    pub async fn update(
        &self,
        input: UpdateInput,
        request_by: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        input.validate()?;

        let Some(recipe) = repository::find(&self.read_db, input.id.to_owned()).await? else {
            foodgram_shared::not_found!("recipe");
        };

        if recipe.author_id != request_by.into() {
            foodgram_shared::forbidden!("not author of recipe");
        }

        self.check_catalog(&input.ingredients).await?;

        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Name, input.name.into()),
                (Recipe::Text, input.text.into()),
                (Recipe::CookingTime, input.cooking_time.into()),
                (
                    Recipe::UpdatedAt,
                    OffsetDateTime::now_utc().unix_timestamp().into(),
                ),
            ])
            .and_where(Expr::col(Recipe::Id).eq(recipe.id.as_str()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let mut tx = self.write_db.begin().await?;
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        repository::delete_ingredients(&mut tx, &recipe.id).await?;
        repository::insert_ingredients(&mut tx, &recipe.id, &input.ingredients).await?;
        tx.commit().await?;

        tracing::info!(recipe.id = %recipe.id, "recipe updated");

        Ok(())
    }
}
