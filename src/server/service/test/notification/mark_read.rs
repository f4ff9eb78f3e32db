use super::*;

/// Tests the recipient marking their notification read.
///
/// Expected: Ok with is_read set
#[tokio::test]
async fn marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let player = factory::create_player(db).await?;
    let created = factory::create_notification(db, player.id, "player").await?;

    let notification = NotificationService::new(db, &push)
        .mark_read(created.id, Recipient::player(player.id))
        .await?;

    assert!(notification.is_read);

    Ok(())
}

/// Tests marking a notification addressed to someone else.
///
/// Expected: Err(NotFound) and the notification stays unread
#[tokio::test]
async fn other_recipient_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let player = factory::create_player(db).await?;
    let created = factory::create_notification(db, player.id, "player").await?;

    let service = NotificationService::new(db, &push);
    // Same numeric id, different role.
    let result = service
        .mark_read(created.id, Recipient::coach(player.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let stored = service.list(Recipient::player(player.id)).await?;
    assert!(!stored[0].is_read);

    Ok(())
}
