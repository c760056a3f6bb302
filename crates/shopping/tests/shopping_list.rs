use std::num::NonZeroU32;

use foodgram_shopping::{
    AggregateOptions, Aggregator, Multiplicity, Selection, to_text,
    storage::{SqliteCatalog, SqliteRecipeStorage},
};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn shopping_list_sums_cart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let fixture = helpers::seed(&state).await?;
    let cmd = foodgram_shopping::Command::new(state);
    let user = &fixture.user_id;

    cmd.cart
        .add(&fixture.recipes["pancakes"], user, NonZeroU32::MIN)
        .await?;
    cmd.cart
        .add(&fixture.recipes["crepes"], user, NonZeroU32::new(3).unwrap())
        .await?;

    let entries = cmd.shopping_list(user).await?;
    assert_eq!(
        to_text(&entries),
        "Egg (pcs): 2\nflour (g): 300\nmilk (ml): 150"
    );

    assert_eq!(entries, cmd.shopping_list(user).await?);

    Ok(())
}

#[tokio::test]
async fn shopping_list_with_portions() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let fixture = helpers::seed(&state).await?;
    let cmd = foodgram_shopping::Command::new(state).with_options(AggregateOptions {
        multiplicity: Multiplicity::Portions,
    });
    let user = &fixture.user_id;

    cmd.cart
        .add(&fixture.recipes["pancakes"], user, NonZeroU32::new(2).unwrap())
        .await?;
    cmd.cart
        .add(&fixture.recipes["crepes"], user, NonZeroU32::MIN)
        .await?;

    let entries = cmd.shopping_list(user).await?;
    assert_eq!(
        to_text(&entries),
        "Egg (pcs): 4\nflour (g): 500\nmilk (ml): 150"
    );

    Ok(())
}

#[tokio::test]
async fn empty_cart_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let fixture = helpers::seed(&state).await?;
    let cmd = foodgram_shopping::Command::new(state);

    let err = cmd.shopping_list(&fixture.user_id).await.unwrap_err();
    assert_eq!(err.to_string(), "shopping cart is empty");
    assert!(err.is_user_facing());

    Ok(())
}

#[tokio::test]
async fn sqlite_collaborators() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let fixture = helpers::seed(&state).await?;
    let aggregator = Aggregator::new(
        SqliteRecipeStorage(state.read_db.clone()),
        SqliteCatalog(state.read_db.clone()),
    );

    let entries = aggregator
        .aggregate(&Selection::from_iter([
            fixture.recipes["toast"].to_owned(),
            fixture.recipes["pancakes"].to_owned(),
        ]))
        .await?;
    assert_eq!(
        to_text(&entries),
        "bread (pcs): 1\nEgg (pcs): 2\nflour (g): 200"
    );

    let err = aggregator
        .aggregate(&Selection::from_iter([
            fixture.recipes["toast"].to_owned(),
            "unknown".to_owned(),
        ]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "recipe unknown not found");

    Ok(())
}
