use super::*;

/// Tests computing a player's history from the performance table.
///
/// Expected: Entries joined with their sessions, most recent session first, limited
#[tokio::test]
async fn orders_by_session_date_and_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;

    let mut session_ids = Vec::new();
    for days_ago in [10, 1, 5] {
        let session = factory::session::SessionFactory::new(db, coach.id, &[player.id])
            .date(Utc::now() - Duration::days(days_ago))
            .build()
            .await?;
        factory::create_performance(db, session.id, player.id).await?;
        session_ids.push(session.id);
    }

    let repo = PerformanceRepository::new(db);
    let history = repo.get_history(player.id, None).await?;
    let limited = repo.get_history(player.id, Some(2)).await?;

    assert_eq!(
        history.iter().map(|(_, s)| s.id).collect::<Vec<_>>(),
        vec![session_ids[1], session_ids[2], session_ids[0]]
    );
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].1.id, session_ids[1]);

    Ok(())
}
