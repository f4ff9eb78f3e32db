use super::*;

/// Tests listing a session's entries.
///
/// Expected: Only that session's entries, with player names resolved
#[tokio::test]
async fn lists_entries_with_player_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::player::PlayerFactory::new(db)
        .first_name("Asha")
        .last_name("Patel")
        .build()
        .await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    let other = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::create_performance(db, session.id, player.id).await?;
    factory::create_performance(db, other.id, player.id).await?;

    let repo = PerformanceRepository::new(db);
    let entries = repo.get_by_session(session.id).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].player_name.as_deref(), Some("Asha Patel"));
    assert_eq!(repo.count_by_session(session.id).await?, 1);

    Ok(())
}

/// Tests listing a session without entries.
///
/// Expected: Empty list
#[tokio::test]
async fn returns_empty_for_session_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let session = factory::create_session(db, coach.id, &[]).await?;

    let entries = PerformanceRepository::new(db)
        .get_by_session(session.id)
        .await?;

    assert!(entries.is_empty());

    Ok(())
}
