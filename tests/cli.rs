use foodgram::{
    Config, cli,
    config::{DatabaseConfig, ObservabilityConfig},
};
use foodgram_recipe::CreateInput;
use foodgram_shared::recipe::IngredientAmount;
use foodgram_shopping::AggregateOptions;
use foodgram_user::RegisterInput;
use std::num::NonZeroU32;
use temp_dir::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap()),
            max_connections: 2,
        },
        observability: ObservabilityConfig::default(),
        shopping: AggregateOptions::default(),
    }
}

#[tokio::test]
async fn import_then_shopping_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);
    cli::migrate(&config).await?;

    let fixture = dir.child("ingredients.json");
    std::fs::write(
        &fixture,
        r#"[
            {"name": "flour", "measurement_unit": "g"},
            {"name": "egg", "measurement_unit": "pcs"},
            {"name": "milk", "measurement_unit": "ml"}
        ]"#,
    )?;
    assert_eq!(cli::import_ingredients(&config, &fixture).await?, 3);
    assert_eq!(cli::import_ingredients(&config, &fixture).await?, 0);

    let state = foodgram::db::create_state(&config.database).await?;
    let user_id = foodgram_user::Command::new(state.clone())
        .register(RegisterInput {
            email: "john@foodgram.localhost".to_owned(),
            username: "john".to_owned(),
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
        })
        .await?;

    let recipe = foodgram_recipe::Command::new(state.clone());
    let catalog = recipe.ingredient.all().await?;
    let id_of = |name: &str| {
        catalog
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.id.to_owned())
            .unwrap()
    };

    let r1 = recipe
        .create(
            CreateInput {
                name: "Pancakes".to_owned(),
                text: "Mix and fry.".to_owned(),
                cooking_time: 20,
                ingredients: vec![
                    IngredientAmount::new(id_of("flour"), 200),
                    IngredientAmount::new(id_of("egg"), 2),
                ],
            },
            &user_id,
        )
        .await?;
    let r2 = recipe
        .create(
            CreateInput {
                name: "Crepes".to_owned(),
                text: "Whisk and fry thin.".to_owned(),
                cooking_time: 15,
                ingredients: vec![
                    IngredientAmount::new(id_of("flour"), 100),
                    IngredientAmount::new(id_of("milk"), 150),
                ],
            },
            &user_id,
        )
        .await?;

    let err = cli::shopping_list(&config, &user_id).await.unwrap_err();
    assert_eq!(err.to_string(), "shopping cart is empty");

    let shopping = foodgram_shopping::Command::new(state);
    shopping.cart.add(&r1, &user_id, NonZeroU32::MIN).await?;
    shopping.cart.add(&r2, &user_id, NonZeroU32::MIN).await?;

    let text = cli::shopping_list(&config, &user_id).await?;
    assert_eq!(text, "egg (pcs): 2\nflour (g): 300\nmilk (ml): 150");

    Ok(())
}

#[tokio::test]
async fn set_role_by_email() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);
    cli::migrate(&config).await?;

    let state = foodgram::db::create_state(&config.database).await?;
    let user = foodgram_user::Command::new(state);
    let id = user
        .register(RegisterInput {
            email: "admin@foodgram.localhost".to_owned(),
            username: "admin".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Admin".to_owned(),
        })
        .await?;

    cli::set_role(&config, "admin@foodgram.localhost", cli::Role::Admin).await?;
    assert!(user.find(&id).await?.unwrap().is_admin());

    assert!(
        cli::set_role(&config, "nobody@foodgram.localhost", cli::Role::User)
            .await
            .is_err()
    );

    Ok(())
}

#[tokio::test]
async fn reset_recreates_database() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    cli::reset(&config).await?;
    assert!(dir.child("db.sqlite3").exists());
    cli::reset(&config).await?;

    let fixture = dir.child("ingredients.json");
    std::fs::write(&fixture, r#"[{"name": "salt", "measurement_unit": "g"}]"#)?;
    assert_eq!(cli::import_ingredients(&config, &fixture).await?, 1);

    Ok(())
}
