use foodgram_shared::user::Role;
use foodgram_user::RegisterInput;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn register_then_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state);

    let id = cmd.register(helpers::register_input("john")).await?;
    let user = cmd.find(&id).await?.unwrap();

    assert_eq!(user.username, "john");
    assert_eq!(user.email, "john@foodgram.localhost");
    assert_eq!(user.role.0, Role::User);
    assert!(!user.is_admin());

    let by_email = cmd.find_by_email("john@foodgram.localhost").await?.unwrap();
    assert_eq!(by_email.id, id);

    Ok(())
}

#[tokio::test]
async fn validate_unique_emails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state);

    cmd.register(helpers::register_input("john")).await?;
    let user_2 = cmd
        .register(RegisterInput {
            username: "john_2".to_owned(),
            ..helpers::register_input("john")
        })
        .await;

    assert_eq!(user_2.unwrap_err().to_string(), "Email already exists");

    Ok(())
}

#[tokio::test]
async fn validate_unique_usernames() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state);

    cmd.register(helpers::register_input("john")).await?;
    let user_2 = cmd
        .register(RegisterInput {
            email: "other@foodgram.localhost".to_owned(),
            ..helpers::register_input("john")
        })
        .await;

    assert_eq!(user_2.unwrap_err().to_string(), "Username already exists");

    Ok(())
}

#[tokio::test]
async fn reject_invalid_username() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state);

    let res = cmd
        .register(RegisterInput {
            username: "john doe!".to_owned(),
            ..helpers::register_input("john")
        })
        .await;

    assert!(matches!(res, Err(foodgram_shared::Error::Validate(_))));

    Ok(())
}

#[tokio::test]
async fn set_role_to_admin() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state);

    let id = cmd.register(helpers::register_input("john")).await?;
    cmd.set_role(&id, Role::Admin).await?;
    assert!(cmd.find(&id).await?.unwrap().is_admin());

    let res = cmd.set_role("unknown", Role::Admin).await;
    assert_eq!(res.unwrap_err().to_string(), "user not found");

    Ok(())
}
