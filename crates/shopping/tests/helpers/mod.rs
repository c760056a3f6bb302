use std::{collections::HashMap, path::PathBuf, str::FromStr};

use foodgram_recipe::CreateInput;
use foodgram_shared::{State, recipe::IngredientAmount};
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

pub struct Fixture {
    pub user_id: String,
    pub recipes: HashMap<&'static str, String>,
}

/// One user, a small catalog and three recipes:
/// pancakes (flour 200 g, egg 2 pcs), crepes (flour 100 g, milk 150 ml)
/// and toast (bread 1 pcs).
pub async fn seed(state: &State) -> anyhow::Result<Fixture> {
    let user_id = foodgram_user::Command::new(state.clone())
        .register(RegisterInput {
            email: "john@foodgram.localhost".to_owned(),
            username: "john".to_owned(),
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
        })
        .await?;

    let recipe = foodgram_recipe::Command::new(state.clone());
    recipe
        .ingredient
        .import_json(
            r#"[
                {"name": "flour", "measurement_unit": "g"},
                {"name": "Egg", "measurement_unit": "pcs"},
                {"name": "milk", "measurement_unit": "ml"},
                {"name": "bread", "measurement_unit": "pcs"}
            ]"#,
        )
        .await?;

    let catalog: HashMap<String, String> = recipe
        .ingredient
        .all()
        .await?
        .into_iter()
        .map(|i| (i.name, i.id))
        .collect();

    let mut recipes = HashMap::new();
    for (name, ingredients) in [
        ("pancakes", vec![("flour", 200), ("Egg", 2)]),
        ("crepes", vec![("flour", 100), ("milk", 150)]),
        ("toast", vec![("bread", 1)]),
    ] {
        let id = recipe
            .create(
                CreateInput {
                    name: name.to_owned(),
                    text: "Cook it.".to_owned(),
                    cooking_time: 10,
                    ingredients: ingredients
                        .into_iter()
                        .map(|(ingredient, amount)| {
                            IngredientAmount::new(&catalog[ingredient], amount)
                        })
                        .collect(),
                },
                &user_id,
            )
            .await?;
        recipes.insert(name, id);
    }

    Ok(Fixture { user_id, recipes })
}
