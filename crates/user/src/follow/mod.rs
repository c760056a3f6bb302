use foodgram_db::table::{Follow, Recipe, User as UserTable};
use sea_query::{Expr, ExprTrait, Func, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use std::{collections::HashMap, ops::Deref};
use time::OffsetDateTime;

use crate::repository::{self, FindType, User};

#[derive(Debug, Clone)]
pub struct FollowedAuthor {
    pub user: User,
    pub recipes_count: u32,
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
    pub async fn is_following(
        &self,
        author_id: impl Into<String>,
        follower_id: impl Into<String>,
    ) -> foodgram_shared::Result<bool> {
        let statement = Query::select()
            .column(Follow::AuthorId)
            .from(Follow::Table)
            .and_where(Expr::col(Follow::AuthorId).eq(author_id.into()))
            .and_where(Expr::col(Follow::FollowerId).eq(follower_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn follow(
        &self,
        author_id: impl Into<String>,
        follower_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let author_id = author_id.into();
        let follower_id = follower_id.into();

        if author_id == follower_id {
            foodgram_shared::user!("cannot follow yourself");
        }

        if repository::find(&self.read_db, FindType::Id(author_id.to_owned()))
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("author");
        }

        if repository::find(&self.read_db, FindType::Id(follower_id.to_owned()))
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("user");
        }

        let statement = Query::insert()
            .into_table(Follow::Table)
            .columns([Follow::FollowerId, Follow::AuthorId, Follow::CreatedAt])
            .values_panic([
                follower_id.into(),
                author_id.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([Follow::FollowerId, Follow::AuthorId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("already following this author");
        }

        Ok(())
    }

    pub async fn unfollow(
        &self,
        author_id: impl Into<String>,
        follower_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Follow::Table)
            .and_where(Expr::col(Follow::AuthorId).eq(author_id.into()))
            .and_where(Expr::col(Follow::FollowerId).eq(follower_id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("not following this author");
        }

        Ok(())
    }

    /// Authors followed by `follower_id` with their recipe count, ordered by
    /// username.
    pub async fn following(
        &self,
        follower_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<FollowedAuthor>> {
        let authors = Query::select()
            .column(Follow::AuthorId)
            .from(Follow::Table)
            .and_where(Expr::col(Follow::FollowerId).eq(follower_id.into()))
            .to_owned();

        let statement = Query::select()
            .columns([
                UserTable::Id,
                UserTable::Email,
                UserTable::Username,
                UserTable::FirstName,
                UserTable::LastName,
                UserTable::Role,
                UserTable::CreatedAt,
            ])
            .from(UserTable::Table)
            .and_where(Expr::col(UserTable::Id).in_subquery(authors))
            .order_by(UserTable::Username, sea_query::Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let users = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        if users.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .column(Recipe::AuthorId)
            .expr(Func::count(Expr::col(Recipe::Id)))
            .from(Recipe::Table)
            .and_where(
                Expr::col(Recipe::AuthorId).is_in(users.iter().map(|user| user.id.to_owned())),
            )
            .group_by_col(Recipe::AuthorId)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let counts: HashMap<String, u32> =
            sqlx::query_as_with::<_, (String, u32), _>(&sql, values)
                .fetch_all(&self.read_db)
                .await?
                .into_iter()
                .collect();

        Ok(users
            .into_iter()
            .map(|user| FollowedAuthor {
                recipes_count: counts.get(&user.id).copied().unwrap_or_default(),
                user,
            })
            .collect())
    }
}
