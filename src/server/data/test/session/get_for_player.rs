use super::*;

/// Tests listing the sessions a player is rostered on.
///
/// Expected: Only sessions containing the player, newest first
#[tokio::test]
async fn lists_rostered_sessions_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;

    let older = factory::session::SessionFactory::new(db, coach.id, &[player.id])
        .date(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newer = factory::session::SessionFactory::new(db, coach.id, &[player.id, other.id])
        .date(Utc::now() + Duration::days(3))
        .build()
        .await?;
    factory::create_session(db, coach.id, &[other.id]).await?;

    let sessions = SessionRepository::new(db).get_for_player(player.id).await?;

    assert_eq!(
        sessions.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}
