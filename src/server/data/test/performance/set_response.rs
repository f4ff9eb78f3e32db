use super::*;

/// Tests storing a player's response on an entry.
///
/// Expected: Ok(Some) with the response persisted
#[tokio::test]
async fn stores_response() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    let entry = factory::create_performance(db, session.id, player.id).await?;

    let repo = PerformanceRepository::new(db);
    let updated = repo
        .set_response(entry.id, "Will practise".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.player_response.as_deref(), Some("Will practise"));
    let stored = repo.find(session.id, player.id).await?.unwrap();
    assert_eq!(stored.player_response.as_deref(), Some("Will practise"));

    Ok(())
}

/// Tests writing a response over an existing one.
///
/// Expected: Ok(None) and the first response kept
#[tokio::test]
async fn keeps_existing_response() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    let entry = factory::create_performance(db, session.id, player.id).await?;

    let repo = PerformanceRepository::new(db);
    repo.set_response(entry.id, "First".to_string()).await?;
    let second = repo.set_response(entry.id, "Second".to_string()).await?;

    assert!(second.is_none());
    let stored = repo.find(session.id, player.id).await?.unwrap();
    assert_eq!(stored.player_response.as_deref(), Some("First"));

    Ok(())
}
