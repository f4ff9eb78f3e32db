use super::*;
use crate::server::service::test::{coach, player};

/// Tests the coach dashboard totals.
///
/// Expected: two sessions, and a player on both rosters counted once
#[tokio::test]
async fn counts_sessions_and_distinct_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = coach(db).await?;
    let other_coach = factory::create_coach(db).await?;
    let shared = player(db).await?;
    let solo = player(db).await?;

    factory::create_session(db, coach.id, &[shared.id, solo.id]).await?;
    factory::create_session(db, coach.id, &[shared.id]).await?;
    factory::create_session(db, other_coach.id, &[solo.id]).await?;

    let dashboard = CoachService::new(db).dashboard(coach).await?;

    assert_eq!(dashboard.total_sessions, 2);
    assert_eq!(dashboard.total_players, 2);
    assert_eq!(dashboard.sessions.len(), 2);

    Ok(())
}
