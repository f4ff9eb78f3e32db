use super::*;

/// Tests deleting the caller's own notification.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let notification = factory::create_notification(db, coach.id, "coach").await?;

    let deleted = NotificationRepository::new(db)
        .delete(notification.id, Recipient::coach(coach.id))
        .await?;

    assert!(deleted);
    assert!(entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting with the right id but the wrong role.
///
/// Expected: Ok(false) and the row kept
#[tokio::test]
async fn keeps_notification_for_wrong_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let notification = factory::create_notification(db, coach.id, "coach").await?;

    let deleted = NotificationRepository::new(db)
        .delete(notification.id, Recipient::player(coach.id))
        .await?;

    assert!(!deleted);
    assert!(entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
