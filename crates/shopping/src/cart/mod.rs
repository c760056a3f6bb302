mod add;
mod remove;

use foodgram_db::table::ShoppingCart;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use std::ops::Deref;

#[derive(Debug, Clone, FromRow)]
pub struct CartItem {
    pub recipe_id: String,
    pub portions: u32,
    pub created_at: i64,
}

#[derive(Clone)]
pub struct Command(pub(crate) foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub async fn contains(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<bool> {
        let statement = Query::select()
            .column(ShoppingCart::RecipeId)
            .from(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::RecipeId).eq(recipe_id.into()))
            .and_where(Expr::col(ShoppingCart::UserId).eq(user_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }

    /// Cart content of a user, oldest first.
    pub async fn items(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<CartItem>> {
        let statement = Query::select()
            .columns([
                ShoppingCart::RecipeId,
                ShoppingCart::Portions,
                ShoppingCart::CreatedAt,
            ])
            .from(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::UserId).eq(user_id.into()))
            .order_by(ShoppingCart::CreatedAt, sea_query::Order::Asc)
            .order_by(ShoppingCart::RecipeId, sea_query::Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CartItem, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
