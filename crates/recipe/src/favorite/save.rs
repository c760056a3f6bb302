use foodgram_db::table::Favorite;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::repository;

impl super::Command {
    pub async fn save(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let id = id.into();
        let user_id = user_id.into();

        if !repository::exists(&self.read_db, id.to_owned()).await? {
            foodgram_shared::not_found!("recipe");
        }

        if repository::find_user_role(&self.read_db, user_id.to_owned())
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("user");
        }

        let statement = Query::insert()
            .into_table(Favorite::Table)
            .columns([Favorite::UserId, Favorite::RecipeId, Favorite::CreatedAt])
            .values_panic([
                user_id.into(),
                id.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([Favorite::UserId, Favorite::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("recipe already in favorites");
        }

        Ok(())
    }
}
