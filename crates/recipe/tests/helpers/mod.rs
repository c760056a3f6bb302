use std::{collections::HashMap, path::PathBuf, str::FromStr};

use foodgram_shared::State;
use foodgram_user::RegisterInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_user(state: &State, name: &str) -> anyhow::Result<String> {
    let command = foodgram_user::Command::new(state.clone());

    Ok(command
        .register(RegisterInput {
            email: format!("{name}@foodgram.localhost"),
            username: name.to_owned(),
            first_name: name.to_owned(),
            last_name: "Doe".to_owned(),
        })
        .await?)
}

/// Imports a small catalog and returns ids by ingredient name.
#[allow(dead_code)]
pub async fn seed_catalog(state: &State) -> anyhow::Result<HashMap<String, String>> {
    let command = foodgram_recipe::Command::new(state.clone());
    command
        .ingredient
        .import_json(
            r#"[
                {"name": "flour", "measurement_unit": "g"},
                {"name": "egg", "measurement_unit": "pcs"},
                {"name": "milk", "measurement_unit": "ml"}
            ]"#,
        )
        .await?;

    Ok(command
        .ingredient
        .all()
        .await?
        .into_iter()
        .map(|i| (i.name, i.id))
        .collect())
}
