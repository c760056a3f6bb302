use foodgram_db::table::{Favorite, Recipe, ShoppingCart};
use foodgram_shared::user::Role;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::repository;

impl super::Command {
    /// Removes a recipe with its ingredients, favorites and cart entries.
    /// Allowed for the author and for admins.
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let Some(recipe) = repository::find(&self.read_db, id.into()).await? else {
            foodgram_shared::not_found!("recipe");
        };

        let request_by = request_by.into();
        if recipe.author_id != request_by {
            let role = repository::find_user_role(&self.read_db, request_by).await?;
            if role != Some(Role::Admin) {
                foodgram_shared::forbidden!("not author of recipe");
            }
        }

        let mut tx = self.write_db.begin().await?;

        repository::delete_ingredients(&mut tx, &recipe.id).await?;

        let statements = [
            Query::delete()
                .from_table(Favorite::Table)
                .and_where(Expr::col(Favorite::RecipeId).eq(recipe.id.as_str()))
                .to_owned(),
            Query::delete()
                .from_table(ShoppingCart::Table)
                .and_where(Expr::col(ShoppingCart::RecipeId).eq(recipe.id.as_str()))
                .to_owned(),
            Query::delete()
                .from_table(Recipe::Table)
                .and_where(Expr::col(Recipe::Id).eq(recipe.id.as_str()))
                .to_owned(),
        ];

        for statement in statements {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(recipe.id = %recipe.id, "recipe deleted");

        Ok(())
    }
}
