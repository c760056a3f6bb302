use std::num::NonZeroU32;

use crate::{
    Aggregator, Selection, ShoppingListEntry,
    storage::{SqliteCatalog, SqliteRecipeStorage},
};

impl super::Command {
    /// Aggregated shopping list for everything in the user's cart.
    pub async fn shopping_list(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<ShoppingListEntry>> {
        let user_id = user_id.into();
        let items = self.cart.items(&user_id).await?;

        let mut selection = Selection::new();
        for item in items {
            let Some(portions) = NonZeroU32::new(item.portions) else {
                foodgram_shared::bail!("cart item {} has zero portions", item.recipe_id);
            };

            selection.push(item.recipe_id, portions);
        }

        let aggregator = Aggregator::new(
            SqliteRecipeStorage(self.read_db.clone()),
            SqliteCatalog(self.read_db.clone()),
        )
        .with_options(self.options);

        let entries = aggregator.aggregate(&selection).await?;

        tracing::info!(
            user.id = %user_id,
            entries = entries.len(),
            multiplicity = ?self.options.multiplicity,
            "shopping list built"
        );

        Ok(entries)
    }
}
