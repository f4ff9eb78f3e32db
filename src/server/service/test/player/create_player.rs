use super::*;

/// Tests creating a player with login credentials.
///
/// Expected: Ok with a generated PLR id and a verifiable password hash
#[tokio::test]
async fn creates_player_with_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerService::new(db)
        .create_player(params(Some(("asha", "cover-drive"))))
        .await?;

    assert_eq!(player.player_id, "PLR1001");
    assert_eq!(player.username.as_deref(), Some("asha"));
    let hash = player.password_hash.expect("password hash stored");
    assert!(verify_password("cover-drive", &hash)?);

    Ok(())
}

/// Tests creating a roster-only player.
///
/// Expected: Ok with neither username nor password hash
#[tokio::test]
async fn creates_player_without_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerService::new(db).create_player(params(None)).await?;

    assert!(player.username.is_none());
    assert!(player.password_hash.is_none());

    Ok(())
}

/// Tests two creations in a row.
///
/// Expected: distinct generated ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let first = service.create_player(params(None)).await?;
    let second = service.create_player(params(None)).await?;

    assert_ne!(first.player_id, second.player_id);

    Ok(())
}

/// Tests creating a player with a taken username.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .username("asha")
        .password("other")
        .build()
        .await?;

    let result = PlayerService::new(db)
        .create_player(params(Some(("asha", "cover-drive"))))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
