mod ingredient;
mod shopping;
mod user;

pub use ingredient::import_ingredients;
pub use shopping::shopping_list;
pub use user::{Role, set_role};

use anyhow::Result;
use sqlx::migrate::MigrateDatabase;
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;

/// Create the database if needed and apply every pending migration
#[tracing::instrument(skip(config))]
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and migrate again
#[tracing::instrument(skip(config))]
pub async fn reset(config: &Config) -> Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
