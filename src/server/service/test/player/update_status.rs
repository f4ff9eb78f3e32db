use super::*;

/// Tests changing a player's status.
///
/// Expected: Ok with the new status
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let updated = PlayerService::new(db)
        .update_status(player.id, PlayerStatus::Graduated)
        .await?;

    assert_eq!(updated.status, PlayerStatus::Graduated);

    Ok(())
}

/// Tests changing the status of a player that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerService::new(db)
        .update_status(999, PlayerStatus::Inactive)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
