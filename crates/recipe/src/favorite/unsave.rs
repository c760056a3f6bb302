use foodgram_db::table::Favorite;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn unsave(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Favorite::Table)
            .and_where(Expr::col(Favorite::RecipeId).eq(id.into()))
            .and_where(Expr::col(Favorite::UserId).eq(user_id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("recipe not in favorites");
        }

        Ok(())
    }
}
