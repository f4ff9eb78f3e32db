use super::*;

/// Tests creating a player without login credentials.
///
/// Expected: Ok with no username or password hash stored
#[tokio::test]
async fn creates_player_without_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.create("PLR1001".to_string(), None, params()).await?;

    assert_eq!(player.player_id, "PLR1001");
    assert_eq!(player.role, PlayerRole::AllRounder);
    assert!(player.username.is_none());
    assert!(player.password_hash.is_none());

    Ok(())
}

/// Tests creating a player with login credentials.
///
/// Expected: Ok with the player findable by username
#[tokio::test]
async fn creates_player_with_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(
            "PLR1001".to_string(),
            Some(("asha".to_string(), "hash".to_string())),
            params(),
        )
        .await?;

    let found = repo.find_by_username("asha").await?.unwrap();
    assert_eq!(found.id, player.id);
    assert_eq!(found.password_hash.as_deref(), Some("hash"));

    Ok(())
}

/// Tests that several players without usernames can coexist.
///
/// Expected: Ok for both inserts despite the unique username column
#[tokio::test]
async fn allows_multiple_players_without_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.create("PLR1001".to_string(), None, params()).await?;
    repo.create("PLR1002".to_string(), None, params()).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
