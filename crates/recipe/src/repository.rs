use foodgram_db::table::{Recipe, RecipeIngredient, User};
use foodgram_shared::{recipe::IngredientAmount, user::Role};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub author_id: String,
    pub name: String,
    pub text: String,
    pub cooking_time: u32,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

pub(crate) async fn find(
    pool: &SqlitePool,
    id: String,
) -> foodgram_shared::Result<Option<RecipeRow>> {
    let statement = Query::select()
        .columns([
            Recipe::Id,
            Recipe::AuthorId,
            Recipe::Name,
            Recipe::Text,
            Recipe::CookingTime,
            Recipe::CreatedAt,
            Recipe::UpdatedAt,
        ])
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn exists(pool: &SqlitePool, id: String) -> foodgram_shared::Result<bool> {
    let statement = Query::select()
        .column(Recipe::Id)
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn find_ingredients(
    pool: &SqlitePool,
    recipe_id: String,
) -> foodgram_shared::Result<Vec<IngredientAmount>> {
    let statement = Query::select()
        .columns([RecipeIngredient::IngredientId, RecipeIngredient::Amount])
        .from(RecipeIngredient::Table)
        .and_where(Expr::col(RecipeIngredient::RecipeId).eq(recipe_id))
        .order_by(RecipeIngredient::IngredientId, sea_query::Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, (String, u32), _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(ingredient_id, amount)| IngredientAmount {
            ingredient_id,
            amount,
        })
        .collect())
}

pub(crate) async fn insert_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: &str,
    ingredients: &[IngredientAmount],
) -> foodgram_shared::Result<()> {
    if ingredients.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(RecipeIngredient::Table)
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::IngredientId,
            RecipeIngredient::Amount,
        ])
        .to_owned();

    for ingredient in ingredients {
        statement.values_panic([
            recipe_id.into(),
            ingredient.ingredient_id.to_owned().into(),
            ingredient.amount.into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn delete_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: &str,
) -> foodgram_shared::Result<()> {
    let statement = Query::delete()
        .from_table(RecipeIngredient::Table)
        .and_where(Expr::col(RecipeIngredient::RecipeId).eq(recipe_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

/// Role of a user, `None` when the user does not exist.
pub(crate) async fn find_user_role(
    pool: &SqlitePool,
    id: String,
) -> foodgram_shared::Result<Option<Role>> {
    let statement = Query::select()
        .column(User::Role)
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (sqlx::types::Text<Role>,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(role,)| role.0))
}
