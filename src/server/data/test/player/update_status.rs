use super::*;

/// Tests changing a player's status.
///
/// Expected: Ok(Some) with the new status persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update_status(player.id, PlayerStatus::Graduated)
        .await?
        .unwrap();

    assert_eq!(updated.status, PlayerStatus::Graduated);
    assert_eq!(
        repo.find_by_id(player.id).await?.map(|p| p.status),
        Some(PlayerStatus::Graduated)
    );

    Ok(())
}

/// Tests changing the status of an unknown player.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerRepository::new(db)
        .update_status(42, PlayerStatus::Inactive)
        .await?;

    assert!(result.is_none());

    Ok(())
}
