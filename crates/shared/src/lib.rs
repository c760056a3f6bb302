mod command;
pub mod recipe;
pub mod user;

pub use command::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    /// Same pool for reads and writes, used by the CLI and tests.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}

pub fn new_id() -> String {
    ulid::Ulid::new().to_string()
}
