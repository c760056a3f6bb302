use foodgram_db::table::User as UserTable;
use foodgram_shared::user::Role;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: sqlx::types::Text<Role>,
    pub created_at: i64,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.0 == Role::Admin
    }
}

pub enum FindType {
    Id(String),
    Email(String),
    Username(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> foodgram_shared::Result<Option<User>> {
    let mut statement = Query::select()
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
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(UserTable::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(UserTable::Email).eq(email)),
        FindType::Username(username) => {
            statement.and_where(Expr::col(UserTable::Username).eq(username))
        }
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, User, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) struct CreateInput {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> foodgram_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(UserTable::Table)
        .columns([
            UserTable::Id,
            UserTable::Email,
            UserTable::Username,
            UserTable::FirstName,
            UserTable::LastName,
            UserTable::Role,
            UserTable::CreatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.email.into(),
            input.username.into(),
            input.first_name.into(),
            input.last_name.into(),
            Role::User.to_string().into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn update_role(
    pool: &SqlitePool,
    id: String,
    role: Role,
) -> foodgram_shared::Result<()> {
    let statement = Query::update()
        .table(UserTable::Table)
        .value(UserTable::Role, role.as_ref())
        .and_where(Expr::col(UserTable::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
