use super::*;

/// Tests deleting the recipient's own notification.
///
/// Expected: Ok and the list is empty afterwards
#[tokio::test]
async fn deletes_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = factory::create_coach(db).await?;
    let created = factory::create_notification(db, coach.id, "coach").await?;

    let service = NotificationService::new(db, &push);
    service.delete(created.id, Recipient::coach(coach.id)).await?;

    assert!(service.list(Recipient::coach(coach.id)).await?.is_empty());

    Ok(())
}

/// Tests deleting another recipient's notification and a missing id.
///
/// Expected: Err(NotFound) for both; the original survives
#[tokio::test]
async fn other_recipient_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let owner = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;
    let created = factory::create_notification(db, owner.id, "player").await?;

    let service = NotificationService::new(db, &push);
    let foreign = service.delete(created.id, Recipient::player(other.id)).await;
    let missing = service.delete(999, Recipient::player(owner.id)).await;

    assert!(matches!(foreign, Err(AppError::NotFound(_))));
    assert!(matches!(missing, Err(AppError::NotFound(_))));
    assert_eq!(service.list(Recipient::player(owner.id)).await?.len(), 1);

    Ok(())
}
