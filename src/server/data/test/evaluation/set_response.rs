use super::*;

/// Tests recording a player's response.
///
/// Expected: Response stored and player_responded set
#[tokio::test]
async fn stores_response_and_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let evaluation = factory::create_evaluation(db, player.id, coach.id).await?;

    let updated = EvaluationRepository::new(db)
        .set_response(evaluation.id, "Thank you".to_string())
        .await?
        .unwrap();

    assert!(updated.player_responded);
    assert_eq!(updated.player_response.as_deref(), Some("Thank you"));

    Ok(())
}

/// Tests responding to an unknown evaluation.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_evaluation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EvaluationRepository::new(db)
        .set_response(31, "Hello".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests responding to an evaluation that already has a response.
///
/// Expected: Ok(None) and the first response kept
#[tokio::test]
async fn keeps_existing_response() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let evaluation = factory::create_evaluation(db, player.id, coach.id).await?;

    let repo = EvaluationRepository::new(db);
    repo.set_response(evaluation.id, "First".to_string()).await?;
    let second = repo.set_response(evaluation.id, "Second".to_string()).await?;

    assert!(second.is_none());
    let stored = repo.find_by_id(evaluation.id).await?.unwrap();
    assert_eq!(stored.player_response.as_deref(), Some("First"));

    Ok(())
}
