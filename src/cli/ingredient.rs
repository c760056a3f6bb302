use std::path::Path;

use anyhow::Result;

use crate::config::Config;

/// Import the ingredient catalog from a JSON fixture
#[tracing::instrument(skip(config))]
pub async fn import_ingredients(config: &Config, path: &Path) -> Result<usize> {
    let data = std::fs::read_to_string(path)?;
    let state = crate::db::create_state(&config.database).await?;
    let command = foodgram_recipe::Command::new(state);

    let inserted = command.ingredient.import_json(&data).await?;

    tracing::info!(inserted, "ingredient catalog imported from {}", path.display());

    Ok(inserted)
}
