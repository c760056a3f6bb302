use foodgram_shared::recipe::IngredientAmount;
use std::{collections::HashSet, ops::Deref};
use validator::ValidationError;

use crate::repository;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command {
    state: foodgram_shared::State,
    pub favorite: crate::favorite::Command,
    pub ingredient: crate::ingredient::Command,
}

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: foodgram_shared::State) -> Self {
        Self {
            favorite: crate::favorite::Command(state.clone()),
            ingredient: crate::ingredient::Command(state.clone()),
            state,
        }
    }

    pub async fn load(&self, id: impl Into<String>) -> foodgram_shared::Result<Option<Recipe>> {
        let Some(row) = repository::find(&self.read_db, id.into()).await? else {
            return Ok(None);
        };

        let ingredients = repository::find_ingredients(&self.read_db, row.id.to_owned()).await?;

        Ok(Some(Recipe {
            id: row.id,
            author_id: row.author_id,
            name: row.name,
            text: row.text,
            cooking_time: row.cooking_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
            ingredients,
        }))
    }

    /// Fails unless every ingredient references an existing catalog entry.
    async fn check_catalog(
        &self,
        ingredients: &[IngredientAmount],
    ) -> foodgram_shared::Result<()> {
        let ids = ingredients
            .iter()
            .map(|i| i.ingredient_id.to_owned())
            .collect::<Vec<_>>();

        let found = self
            .ingredient
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|i| i.id)
            .collect::<HashSet<_>>();

        if let Some(missing) = ids.iter().find(|id| !found.contains(*id)) {
            foodgram_shared::user!("ingredient {missing} does not exist");
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub author_id: String,
    pub name: String,
    pub text: String,
    pub cooking_time: u32,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub ingredients: Vec<IngredientAmount>,
}

fn validate_ingredients(ingredients: &[IngredientAmount]) -> Result<(), ValidationError> {
    if ingredients.is_empty() {
        return Err(ValidationError::new("ingredients_empty")
            .with_message("A recipe needs at least one ingredient.".into()));
    }

    let mut seen = HashSet::new();
    for ingredient in ingredients {
        if ingredient.amount < 1 {
            return Err(ValidationError::new("ingredient_amount")
                .with_message("Ingredient amount must be at least 1.".into()));
        }

        if !seen.insert(ingredient.ingredient_id.as_str()) {
            return Err(ValidationError::new("ingredient_duplicate")
                .with_message("Ingredients must not repeat.".into()));
        }
    }

    Ok(())
}
