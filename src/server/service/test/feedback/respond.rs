use super::*;

/// Tests a player's first response to their feedback.
///
/// Expected: response stored, coach notified and pushed `new-player-response`
#[tokio::test]
async fn stores_response_and_notifies_coach() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();
    let mut events = push.subscribe();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::create_performance(db, session.id, player.id).await?;

    let entry = FeedbackService::new(db, &push)
        .respond(&player, session.id, "  Will work on it  ")
        .await?;

    assert_eq!(entry.player_response.as_deref(), Some("Will work on it"));
    let notifications = NotificationRepository::new(db)
        .get_for_recipient(Recipient::coach(coach.id))
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::ResponseSubmitted);
    assert_eq!(notifications[0].player.as_ref().map(|p| p.id), Some(player.id));

    let pushed = events.try_recv().expect("push delivered");
    assert_eq!(pushed.event, EVENT_NEW_PLAYER_RESPONSE);
    assert_eq!(pushed.recipient, Recipient::coach(coach.id));

    Ok(())
}

/// Tests responding twice.
///
/// Expected: Err(BadRequest) and the first response kept
#[tokio::test]
async fn rejects_second_response() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::create_performance(db, session.id, player.id).await?;

    let service = FeedbackService::new(db, &push);
    service.respond(&player, session.id, "First").await?;
    let result = service.respond(&player, session.id, "Second").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = PerformanceRepository::new(db)
        .find(session.id, player.id)
        .await?
        .expect("entry exists");
    assert_eq!(stored.player_response.as_deref(), Some("First"));

    Ok(())
}

/// Tests responding without an entry and with a blank response.
///
/// Expected: Err(NotFound) without an entry, Err(BadRequest) for a blank response
#[tokio::test]
async fn validates_entry_and_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let rated = player(db).await?;
    let unrated = player(db).await?;
    let session = factory::create_session(db, coach.id, &[rated.id, unrated.id]).await?;
    factory::create_performance(db, session.id, rated.id).await?;

    let service = FeedbackService::new(db, &push);
    let missing = service.respond(&unrated, session.id, "Hello").await;
    let blank = service.respond(&rated, session.id, "   ").await;

    assert!(matches!(missing, Err(AppError::NotFound(_))));
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests two responses to the same entry racing each other.
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
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::create_performance(db, session.id, player.id).await?;

    let service = FeedbackService::new(db, &push);
    let (first, second) = tokio::join!(
        service.respond(&player, session.id, "First"),
        service.respond(&player, session.id, "Second"),
    );

    let (stored, rejected) = match (first, second) {
        (Ok(entry), Err(err)) | (Err(err), Ok(entry)) => (entry, err),
        other => panic!("expected one success and one failure, got {:?}", other),
    };
    assert!(matches!(rejected, AppError::BadRequest(_)));

    let kept = PerformanceRepository::new(db)
        .find(session.id, player.id)
        .await?
        .expect("entry exists");
    assert_eq!(kept.player_response, stored.player_response);
    let notifications = NotificationRepository::new(db)
        .get_for_recipient(Recipient::coach(coach.id))
        .await?;
    assert_eq!(notifications.len(), 1);

    Ok(())
}
