use foodgram_db::table::{Recipe, ShoppingCart, User};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use std::num::NonZeroU32;
use time::OffsetDateTime;

impl super::Command {
    pub async fn add(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
        portions: NonZeroU32,
    ) -> foodgram_shared::Result<()> {
        let recipe_id = recipe_id.into();
        let user_id = user_id.into();

        let statement = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(recipe_id.to_owned()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        if sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("recipe");
        }

        let statement = Query::select()
            .column(User::Id)
            .from(User::Table)
            .and_where(Expr::col(User::Id).eq(user_id.to_owned()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        if sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("user");
        }

        let statement = Query::insert()
            .into_table(ShoppingCart::Table)
            .columns([
                ShoppingCart::UserId,
                ShoppingCart::RecipeId,
                ShoppingCart::Portions,
                ShoppingCart::CreatedAt,
            ])
            .values_panic([
                user_id.into(),
                recipe_id.into(),
                portions.get().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([ShoppingCart::UserId, ShoppingCart::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("recipe already in shopping cart");
        }

        Ok(())
    }

    pub async fn set_portions(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
        portions: NonZeroU32,
    ) -> foodgram_shared::Result<()> {
        let statement = Query::update()
            .table(ShoppingCart::Table)
            .value(ShoppingCart::Portions, portions.get())
            .and_where(Expr::col(ShoppingCart::RecipeId).eq(recipe_id.into()))
            .and_where(Expr::col(ShoppingCart::UserId).eq(user_id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("recipe not in shopping cart");
        }

        Ok(())
    }
}
