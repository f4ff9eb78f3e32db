use super::*;

/// Tests the evaluated player's response.
///
/// Expected: response stored, coach notified and coach_notified set
#[tokio::test]
async fn stores_response_and_notifies_coach() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let created = factory::create_evaluation(db, player.id, coach.id).await?;

    let evaluation = EvaluationService::new(db, &push)
        .respond(&player, created.id, "Thank you")
        .await?;

    assert_eq!(evaluation.player_response.as_deref(), Some("Thank you"));
    assert!(evaluation.player_responded);
    assert!(evaluation.coach_notified);
    let notifications = NotificationRepository::new(db)
        .get_for_recipient(Recipient::coach(coach.id))
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::PlayerResponse);

    Ok(())
}

/// Tests responding twice.
///
/// Expected: Err(BadRequest) on the second attempt
#[tokio::test]
async fn rejects_second_response() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let created = factory::create_evaluation(db, player.id, coach.id).await?;

    let service = EvaluationService::new(db, &push);
    service.respond(&player, created.id, "First").await?;
    let result = service.respond(&player, created.id, "Second").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests responding to someone else's evaluation.
///
/// Expected: Err(NotFound), indistinguishable from a missing evaluation
#[tokio::test]
async fn hides_other_players_evaluations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let owner = player(db).await?;
    let intruder = player(db).await?;
    let created = factory::create_evaluation(db, owner.id, coach.id).await?;

    let result = EvaluationService::new(db, &push)
        .respond(&intruder, created.id, "Mine now")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two responses to the same evaluation racing each other.
///
/// Expected: exactly one succeeds, the other is Err(BadRequest), and the coach is
/// notified once
#[tokio::test]
async fn concurrent_responses_store_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let created = factory::create_evaluation(db, player.id, coach.id).await?;

    let service = EvaluationService::new(db, &push);
    let (first, second) = tokio::join!(
        service.respond(&player, created.id, "First"),
        service.respond(&player, created.id, "Second"),
    );

    let (stored, rejected) = match (first, second) {
        (Ok(evaluation), Err(err)) | (Err(err), Ok(evaluation)) => (evaluation, err),
        other => panic!("expected one success and one failure, got {:?}", other),
    };
    assert!(matches!(rejected, AppError::BadRequest(_)));
    assert!(stored.player_responded);

    let notifications = NotificationRepository::new(db)
        .get_for_recipient(Recipient::coach(coach.id))
        .await?;
    assert_eq!(notifications.len(), 1);

    Ok(())
}
