use std::collections::HashMap;

use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient};
use foodgram_shared::recipe::{CatalogIngredient, IngredientAmount};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

/// Source of recipe ingredient lines.
#[async_trait::async_trait]
pub trait RecipeStorage: Send + Sync {
    /// Ingredient lines keyed by recipe id. Unknown recipes are absent from
    /// the map, recipes without ingredients map to an empty list.
    async fn recipe_ingredients(
        &self,
        ids: &[String],
    ) -> anyhow::Result<HashMap<String, Vec<IngredientAmount>>>;
}

/// Canonical names and units of catalog ingredients.
#[async_trait::async_trait]
pub trait IngredientCatalog: Send + Sync {
    async fn find_many(
        &self,
        ids: &[String],
    ) -> anyhow::Result<HashMap<String, CatalogIngredient>>;
}

#[async_trait::async_trait]
impl RecipeStorage for HashMap<String, Vec<IngredientAmount>> {
    async fn recipe_ingredients(
        &self,
        ids: &[String],
    ) -> anyhow::Result<HashMap<String, Vec<IngredientAmount>>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.get(id).map(|i| (id.to_owned(), i.to_owned())))
            .collect())
    }
}

#[async_trait::async_trait]
impl IngredientCatalog for HashMap<String, CatalogIngredient> {
    async fn find_many(
        &self,
        ids: &[String],
    ) -> anyhow::Result<HashMap<String, CatalogIngredient>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.get(id).map(|i| (id.to_owned(), i.to_owned())))
            .collect())
    }
}

#[derive(Clone)]
pub struct SqliteRecipeStorage(pub SqlitePool);

#[async_trait::async_trait]
impl RecipeStorage for SqliteRecipeStorage {
    async fn recipe_ingredients(
        &self,
        ids: &[String],
    ) -> anyhow::Result<HashMap<String, Vec<IngredientAmount>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let statement = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let mut recipes = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|(id,)| (id, vec![]))
            .collect::<HashMap<_, _>>();

        let statement = Query::select()
            .columns([
                RecipeIngredient::RecipeId,
                RecipeIngredient::IngredientId,
                RecipeIngredient::Amount,
            ])
            .from(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::RecipeId).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String, String, u32), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        for (recipe_id, ingredient_id, amount) in rows {
            recipes
                .entry(recipe_id)
                .or_default()
                .push(IngredientAmount::new(ingredient_id, amount));
        }

        Ok(recipes)
    }
}

#[derive(Clone)]
pub struct SqliteCatalog(pub SqlitePool);

#[async_trait::async_trait]
impl IngredientCatalog for SqliteCatalog {
    async fn find_many(
        &self,
        ids: &[String],
    ) -> anyhow::Result<HashMap<String, CatalogIngredient>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let statement = Query::select()
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String, String, String), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, measurement_unit)| {
                (
                    id.to_owned(),
                    CatalogIngredient {
                        id,
                        name,
                        measurement_unit,
                    },
                )
            })
            .collect())
    }
}
