use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    num::NonZeroU32,
};

use foodgram_shared::recipe::{CatalogIngredient, IngredientAmount};
use serde::{Deserialize, Serialize};

use crate::storage::{IngredientCatalog, RecipeStorage};

/// How repeated selections of a recipe scale its amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplicity {
    /// Every distinct recipe counts once.
    #[default]
    Distinct,
    /// Amounts are multiplied by the portions requested for the recipe.
    Portions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AggregateOptions {
    #[serde(default)]
    pub multiplicity: Multiplicity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRecipe {
    pub recipe_id: String,
    pub portions: NonZeroU32,
}

/// Recipes picked by a single user, usually read from their shopping cart.
#[derive(Debug, Clone, Default)]
pub struct Selection(Vec<SelectedRecipe>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, recipe_id: impl Into<String>, portions: NonZeroU32) -> &mut Self {
        self.0.push(SelectedRecipe {
            recipe_id: recipe_id.into(),
            portions,
        });

        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedRecipe> {
        self.0.iter()
    }

    /// Distinct recipe ids in first-seen order.
    pub fn recipe_ids(&self) -> Vec<String> {
        self.factors(Multiplicity::Distinct)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// Multiplier applied to each distinct recipe, in first-seen order.
    fn factors(&self, multiplicity: Multiplicity) -> Vec<(String, u64)> {
        let mut factors: Vec<(String, u64)> = vec![];
        let mut index: HashMap<&str, usize> = HashMap::new();

        for selected in &self.0 {
            let portions = u64::from(selected.portions.get());
            match index.get(selected.recipe_id.as_str()) {
                Some(&pos) => {
                    if multiplicity == Multiplicity::Portions {
                        factors[pos].1 += portions;
                    }
                }
                None => {
                    let factor = match multiplicity {
                        Multiplicity::Distinct => 1,
                        Multiplicity::Portions => portions,
                    };
                    index.insert(&selected.recipe_id, factors.len());
                    factors.push((selected.recipe_id.to_owned(), factor));
                }
            }
        }

        factors
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.push(id, NonZeroU32::MIN);
        }

        selection
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("selection is empty")]
    EmptySelection,

    #[error("recipe {0} not found")]
    RecipeNotFound(String),

    #[error("ingredient {0} missing from catalog")]
    IngredientNotFound(String),

    #[error("amount overflow for ingredient {0}")]
    AmountOverflow(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<AggregateError> for foodgram_shared::Error {
    fn from(value: AggregateError) -> Self {
        match value {
            AggregateError::EmptySelection => Self::User("shopping cart is empty".to_owned()),
            AggregateError::RecipeNotFound(_) => Self::NotFound("recipe".to_owned()),
            AggregateError::IngredientNotFound(_) | AggregateError::AmountOverflow(_) => {
                Self::Server(value.to_string())
            }
            AggregateError::Storage(err) => Self::Unknown(err),
        }
    }
}

/// One line of a shopping list: total amount of a catalog ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingListEntry {
    pub ingredient_id: String,
    pub name: String,
    pub unit: String,
    pub amount: u64,
}

impl fmt::Display for ShoppingListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.unit, self.amount)
    }
}

/// Renders entries as the downloadable text list, one entry per line.
pub fn to_text(entries: &[ShoppingListEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sums ingredient amounts over already fetched recipe and catalog data.
///
/// Amounts are keyed by catalog id, never by name, and the result is sorted
/// by case-folded name, then unit, then id.
pub fn aggregate_snapshot(
    selection: &Selection,
    recipes: &HashMap<String, Vec<IngredientAmount>>,
    catalog: &HashMap<String, CatalogIngredient>,
    options: AggregateOptions,
) -> Result<Vec<ShoppingListEntry>, AggregateError> {
    if selection.is_empty() {
        return Err(AggregateError::EmptySelection);
    }

    let mut picked = vec![];
    for (recipe_id, factor) in selection.factors(options.multiplicity) {
        let Some(ingredients) = recipes.get(&recipe_id) else {
            return Err(AggregateError::RecipeNotFound(recipe_id));
        };

        picked.push((ingredients, factor));
    }

    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for (ingredients, factor) in picked {
        for ingredient in ingredients {
            let id = ingredient.ingredient_id.as_str();
            let total = totals.entry(id).or_insert(0);
            let Some(sum) = u64::from(ingredient.amount)
                .checked_mul(factor)
                .and_then(|amount| total.checked_add(amount))
            else {
                return Err(AggregateError::AmountOverflow(id.to_owned()));
            };

            *total = sum;
        }
    }

    let mut entries = totals
        .into_iter()
        .map(|(id, amount)| {
            let Some(ingredient) = catalog.get(id) else {
                return Err(AggregateError::IngredientNotFound(id.to_owned()));
            };

            Ok(ShoppingListEntry {
                ingredient_id: ingredient.id.to_owned(),
                name: ingredient.name.to_owned(),
                unit: ingredient.measurement_unit.to_owned(),
                amount,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by_cached_key(|e| {
        (
            e.name.to_lowercase(),
            e.unit.to_owned(),
            e.ingredient_id.to_owned(),
        )
    });

    Ok(entries)
}

/// Builds shopping lists from injected recipe storage and catalog.
pub struct Aggregator<S, C> {
    storage: S,
    catalog: C,
    options: AggregateOptions,
}

impl<S: RecipeStorage, C: IngredientCatalog> Aggregator<S, C> {
    pub fn new(storage: S, catalog: C) -> Self {
        Self {
            storage,
            catalog,
            options: AggregateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AggregateOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn aggregate(
        &self,
        selection: &Selection,
    ) -> Result<Vec<ShoppingListEntry>, AggregateError> {
        if selection.is_empty() {
            return Err(AggregateError::EmptySelection);
        }

        let recipe_ids = selection.recipe_ids();
        let recipes = self.storage.recipe_ingredients(&recipe_ids).await?;

        if let Some(missing) = recipe_ids.iter().find(|id| !recipes.contains_key(*id)) {
            tracing::warn!(recipe.id = %missing, "unknown recipe in selection");
            return Err(AggregateError::RecipeNotFound(missing.to_owned()));
        }

        let ingredient_ids = recipes
            .values()
            .flatten()
            .map(|i| i.ingredient_id.to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        let catalog = self.catalog.find_many(&ingredient_ids).await?;

        match aggregate_snapshot(selection, &recipes, &catalog, self.options) {
            Ok(entries) => {
                tracing::debug!(
                    recipes = recipe_ids.len(),
                    entries = entries.len(),
                    "shopping list aggregated"
                );

                Ok(entries)
            }
            Err(err) => {
                tracing::warn!(error = %err, "shopping list aggregation failed");

                Err(err)
            }
        }
    }
}
