use super::*;

/// Tests storing a notification and pushing it to subscribers.
///
/// Expected: row stored unread; one push addressed to the recipient
#[tokio::test]
async fn stores_then_pushes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();
    let mut events = push.subscribe();

    let player = factory::create_player(db).await?;

    let notification = NotificationService::new(db, &push)
        .notify(
            CreateNotificationParams {
                recipient: Recipient::player(player.id),
                sender_id: None,
                kind: NotificationKind::FeedbackSubmitted,
                session_id: None,
                player_id: None,
                message: "Feedback is ready".to_string(),
            },
            EVENT_NEW_FEEDBACK,
        )
        .await?;

    assert!(!notification.is_read);
    let pushed = events.try_recv().expect("push delivered");
    assert_eq!(pushed.recipient, Recipient::player(player.id));
    assert_eq!(pushed.event, EVENT_NEW_FEEDBACK);
    assert_eq!(pushed.payload["message"], "Feedback is ready");

    Ok(())
}

/// Tests notifying with nobody listening.
///
/// Expected: Ok; the notification is still stored
#[tokio::test]
async fn stores_without_subscribers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = factory::create_coach(db).await?;
    let service = NotificationService::new(db, &push);
    service
        .notify(
            CreateNotificationParams {
                recipient: Recipient::coach(coach.id),
                sender_id: None,
                kind: NotificationKind::PlayerResponse,
                session_id: None,
                player_id: None,
                message: "A player responded".to_string(),
            },
            EVENT_NEW_FEEDBACK,
        )
        .await?;

    assert_eq!(service.list(Recipient::coach(coach.id)).await?.len(), 1);

    Ok(())
}
