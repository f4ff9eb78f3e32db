use super::*;

/// Tests setting each notified flag independently.
///
/// Expected: Only the named party's flag changes
#[tokio::test]
async fn sets_only_named_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let evaluation = factory::create_evaluation(db, player.id, coach.id).await?;

    let repo = EvaluationRepository::new(db);
    repo.mark_notified(evaluation.id, NotifiedParty::Player)
        .await?;

    let stored = repo.find_by_id(evaluation.id).await?.unwrap();
    assert!(stored.player_notified);
    assert!(!stored.coach_notified);

    repo.mark_notified(evaluation.id, NotifiedParty::Coach).await?;

    let stored = repo.find_by_id(evaluation.id).await?.unwrap();
    assert!(stored.coach_notified);

    Ok(())
}
