use super::*;

/// Tests the player's view of feedback.
///
/// Expected: only sessions with an entry for the caller, reduced to that entry
#[tokio::test]
async fn player_sees_only_own_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let me = player(db).await?;
    let teammate = player(db).await?;
    let rated = factory::create_session(db, coach.id, &[me.id, teammate.id]).await?;
    let unrated = factory::create_session(db, coach.id, &[me.id, teammate.id]).await?;
    factory::create_performance(db, rated.id, me.id).await?;
    factory::create_performance(db, rated.id, teammate.id).await?;
    factory::create_performance(db, unrated.id, teammate.id).await?;

    let feedback = FeedbackService::new(db, &push)
        .feedback_for(&Identity::Player(me.clone()))
        .await?;

    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].session.id, rated.id);
    assert_eq!(feedback[0].entries.len(), 1);
    assert_eq!(feedback[0].entries[0].player_id, me.id);

    Ok(())
}

/// Tests the coach's view of feedback.
///
/// Expected: every owned session with all of its entries; other coaches' sessions absent
#[tokio::test]
async fn coach_sees_owned_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let other = factory::create_coach(db).await?;
    let first = player(db).await?;
    let second = player(db).await?;
    let owned = factory::create_session(db, coach.id, &[first.id, second.id]).await?;
    let foreign = factory::create_session(db, other.id, &[first.id]).await?;
    factory::create_performance(db, owned.id, first.id).await?;
    factory::create_performance(db, owned.id, second.id).await?;
    factory::create_performance(db, foreign.id, first.id).await?;

    let feedback = FeedbackService::new(db, &push)
        .feedback_for(&Identity::Coach(coach.clone()))
        .await?;

    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].session.id, owned.id);
    assert_eq!(feedback[0].entries.len(), 2);

    Ok(())
}
