mod save;
mod unsave;

use foodgram_db::table::Favorite;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use std::ops::Deref;

#[derive(Clone)]
pub struct Command(pub(crate) foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub async fn is_saved(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<bool> {
        let statement = Query::select()
            .column(Favorite::RecipeId)
            .from(Favorite::Table)
            .and_where(Expr::col(Favorite::RecipeId).eq(id.into()))
            .and_where(Expr::col(Favorite::UserId).eq(user_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }
}
