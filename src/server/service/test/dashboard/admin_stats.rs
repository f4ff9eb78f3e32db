use super::*;

/// Tests academy-wide totals.
///
/// Expected: counts per table, focus breakdown without empty areas, only
/// sessions inside the upcoming window counted as upcoming
#[tokio::test]
async fn counts_academy_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let a = factory::create_player(db).await?;
    let b = factory::create_player(db).await?;
    factory::create_session(db, coach.id, &[a.id, b.id]).await?;
    factory::session::SessionFactory::new(db, coach.id, &[a.id])
        .focus_area("Fitness")
        .date(Utc::now() + Duration::days(30))
        .build()
        .await?;
    factory::session::SessionFactory::new(db, coach.id, &[b.id])
        .date(Utc::now() - Duration::days(3))
        .build()
        .await?;

    let stats = DashboardService::new(db).admin_stats().await?;

    assert_eq!(stats.total_players, 2);
    assert_eq!(stats.total_coaches, 1);
    assert_eq!(stats.total_sessions, 3);
    assert_eq!(stats.upcoming_sessions, 1);
    assert!(stats
        .sessions_by_focus_area
        .contains(&(FocusArea::Batting, 2)));
    assert!(stats
        .sessions_by_focus_area
        .contains(&(FocusArea::Fitness, 1)));
    assert_eq!(stats.sessions_by_focus_area.len(), 2);

    Ok(())
}
