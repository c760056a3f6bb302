use foodgram_db::table::Ingredient;
use foodgram_shared::recipe::CatalogIngredient;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::prelude::FromRow;
use std::{collections::HashSet, ops::Deref};
use validator::Validate;

/// One entry of the catalog fixture: `[{"name": "...", "measurement_unit": "..."}]`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImportIngredient {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 32))]
    pub measurement_unit: String,
}

#[derive(Debug, Clone, FromRow)]
struct IngredientRow {
    id: String,
    name: String,
    measurement_unit: String,
}

impl From<IngredientRow> for CatalogIngredient {
    fn from(row: IngredientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            measurement_unit: row.measurement_unit,
        }
    }
}

#[derive(Clone)]
pub struct Command(pub(crate) foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn key(name: &str, measurement_unit: &str) -> (String, String) {
    (name.to_lowercase(), measurement_unit.to_lowercase())
}

impl Command {
    /// Inserts new catalog entries and returns how many were added.
    ///
    /// Entries already present, compared case-insensitively on name and unit,
    /// are skipped, so importing the same fixture twice is a no-op.
    pub async fn import(&self, input: Vec<ImportIngredient>) -> foodgram_shared::Result<usize> {
        let mut seen = self
            .all()
            .await?
            .into_iter()
            .map(|i| key(&i.name, &i.measurement_unit))
            .collect::<HashSet<_>>();

        let mut rows = vec![];
        for ingredient in input {
            let ingredient = ImportIngredient {
                name: ingredient.name.trim().to_owned(),
                measurement_unit: ingredient.measurement_unit.trim().to_owned(),
            };
            ingredient.validate()?;

            if !seen.insert(key(&ingredient.name, &ingredient.measurement_unit)) {
                continue;
            }

            rows.push(ingredient);
        }

        if rows.is_empty() {
            return Ok(0);
        }

        let mut tx = self.write_db.begin().await?;
        for ingredient in &rows {
            let statement = Query::insert()
                .into_table(Ingredient::Table)
                .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
                .values_panic([
                    foodgram_shared::new_id().into(),
                    ingredient.name.to_owned().into(),
                    ingredient.measurement_unit.to_owned().into(),
                ])
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        tracing::info!(inserted = rows.len(), "ingredients imported");

        Ok(rows.len())
    }

    pub async fn import_json(&self, data: &str) -> foodgram_shared::Result<usize> {
        let input: Vec<ImportIngredient> = serde_json::from_str(data)?;

        self.import(input).await
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> foodgram_shared::Result<Option<CatalogIngredient>> {
        let statement = Query::select()
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Entries for the given ids. Unknown ids are absent from the result.
    pub async fn find_many(
        &self,
        ids: &[String],
    ) -> foodgram_shared::Result<Vec<CatalogIngredient>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn all(&self) -> foodgram_shared::Result<Vec<CatalogIngredient>> {
        let statement = Query::select()
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .from(Ingredient::Table)
            .order_by(Ingredient::Name, sea_query::Order::Asc)
            .order_by(Ingredient::MeasurementUnit, sea_query::Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
