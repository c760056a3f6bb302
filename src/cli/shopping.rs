use anyhow::Result;

use crate::config::Config;

/// Aggregate the user's shopping cart and render it as text
#[tracing::instrument(skip(config))]
pub async fn shopping_list(config: &Config, user_id: &str) -> Result<String> {
    let state = crate::db::create_state(&config.database).await?;
    let command = foodgram_shopping::Command::new(state).with_options(config.shopping);

    let entries = command.shopping_list(user_id).await?;

    Ok(foodgram_shopping::to_text(&entries))
}
