use std::{path::PathBuf, str::FromStr};

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

pub fn register_input(name: &str) -> RegisterInput {
    RegisterInput {
        email: format!("{name}@foodgram.localhost"),
        username: name.to_owned(),
        first_name: name.to_owned(),
        last_name: "Doe".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn create_users(
    state: &State,
    names: impl IntoIterator<Item = &'static str>,
) -> anyhow::Result<Vec<String>> {
    let command = foodgram_user::Command::new(state.clone());

    let mut ids = vec![];
    for name in names.into_iter() {
        ids.push(command.register(register_input(name)).await?);
    }

    Ok(ids)
}
