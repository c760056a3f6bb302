use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe: a catalog reference and a positive amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub ingredient_id: String,
    pub amount: u32,
}

impl IngredientAmount {
    pub fn new(ingredient_id: impl Into<String>, amount: u32) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            amount,
        }
    }
}

/// Canonical catalog entry for an ingredient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIngredient {
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
}
