use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn follow_and_unfollow() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state.clone());
    let ids = helpers::create_users(&state, ["john", "albert", "zoe"]).await?;
    let (john, albert, zoe) = (&ids[0], &ids[1], &ids[2]);

    cmd.follow.follow(zoe, john).await?;
    cmd.follow.follow(albert, john).await?;
    assert!(cmd.follow.is_following(albert, john).await?);
    assert!(!cmd.follow.is_following(john, albert).await?);

    let following = cmd.follow.following(john).await?;
    let names: Vec<_> = following
        .iter()
        .map(|a| a.user.username.as_str())
        .collect();
    assert_eq!(names, vec!["albert", "zoe"]);

    cmd.follow.unfollow(albert, john).await?;
    assert!(!cmd.follow.is_following(albert, john).await?);

    let res = cmd.follow.unfollow(albert, john).await;
    assert_eq!(res.unwrap_err().to_string(), "not following this author");

    Ok(())
}

#[tokio::test]
async fn follow_rules() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state.clone());
    let ids = helpers::create_users(&state, ["john", "albert"]).await?;

    let res = cmd.follow.follow(&ids[0], &ids[0]).await;
    assert_eq!(res.unwrap_err().to_string(), "cannot follow yourself");

    let res = cmd.follow.follow("unknown", &ids[0]).await;
    assert_eq!(res.unwrap_err().to_string(), "author not found");

    let err = cmd.follow.follow(&ids[1], "ghost-user").await.unwrap_err();
    assert_eq!(err.to_string(), "user not found");
    assert!(err.is_user_facing());

    cmd.follow.follow(&ids[1], &ids[0]).await?;
    let res = cmd.follow.follow(&ids[1], &ids[0]).await;
    assert_eq!(res.unwrap_err().to_string(), "already following this author");

    Ok(())
}

#[tokio::test]
async fn following_counts_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state.clone());
    let ids = helpers::create_users(&state, ["john", "albert", "zoe"]).await?;
    let (john, albert, zoe) = (&ids[0], &ids[1], &ids[2]);

    for (id, author) in [("r1", albert), ("r2", albert), ("r3", john)] {
        sqlx::query(
            "INSERT INTO recipe (id, author_id, name, text, cooking_time, created_at) \
             VALUES (?, ?, ?, 'text', 10, 0)",
        )
        .bind(id)
        .bind(author)
        .bind(id)
        .execute(&state.write_db)
        .await?;
    }

    cmd.follow.follow(albert, john).await?;
    cmd.follow.follow(zoe, john).await?;

    let counts: Vec<_> = cmd
        .follow
        .following(john)
        .await?
        .into_iter()
        .map(|a| (a.user.username, a.recipes_count))
        .collect();
    assert_eq!(
        counts,
        vec![("albert".to_owned(), 2), ("zoe".to_owned(), 0)]
    );
    assert!(cmd.follow.following(zoe).await?.is_empty());

    Ok(())
}
