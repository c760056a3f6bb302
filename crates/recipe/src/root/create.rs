use foodgram_db::table::Recipe;
use foodgram_shared::recipe::IngredientAmount;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;
use validator::Validate;

use super::validate_ingredients;
use crate::repository;

#[derive(Validate, Clone)]
pub struct CreateInput {
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
    pub async fn create(
        &self,
        input: CreateInput,
        request_by: impl Into<String>,
    ) -> foodgram_shared::Result<String> {
        input.validate()?;

        let request_by = request_by.into();
        if repository::find_user_role(&self.read_db, request_by.to_owned())
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("author");
        }

        self.check_catalog(&input.ingredients).await?;

        let id = foodgram_shared::new_id();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::AuthorId,
                Recipe::Name,
                Recipe::Text,
                Recipe::CookingTime,
                Recipe::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                request_by.into(),
                input.name.into(),
                input.text.into(),
                input.cooking_time.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let mut tx = self.write_db.begin().await?;
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        repository::insert_ingredients(&mut tx, &id, &input.ingredients).await?;
        tx.commit().await?;

        tracing::info!(recipe.id = %id, ingredients = input.ingredients.len(), "recipe created");

        Ok(id)
    }
}
