use super::*;

/// Tests counting distinct players across a coach's sessions.
///
/// Expected: A player rostered twice is counted once and other coaches are ignored
#[tokio::test]
async fn counts_distinct_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let other_coach = factory::create_coach(db).await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;
    let third = factory::create_player(db).await?;

    factory::create_session(db, coach.id, &[first.id, second.id]).await?;
    factory::create_session(db, coach.id, &[first.id]).await?;
    factory::create_session(db, other_coach.id, &[third.id]).await?;

    let repo = SessionRepository::new(db);

    assert_eq!(repo.count_players_for_coach(coach.id).await?, 2);
    assert_eq!(repo.count_by_coach(coach.id).await?, 2);

    Ok(())
}
