use super::*;

/// Tests persisting a notification with session and player references.
///
/// Expected: Ok, unread, with the session summary and player name resolved
#[tokio::test]
async fn creates_with_summaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::player::PlayerFactory::new(db)
        .first_name("Asha")
        .last_name("Patel")
        .build()
        .await?;
    let session = factory::session::SessionFactory::new(db, coach.id, &[player.id])
        .focus_area("Fielding")
        .build()
        .await?;

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParams {
            recipient: Recipient::coach(coach.id),
            sender_id: Some(player.id),
            kind: NotificationKind::ResponseSubmitted,
            session_id: Some(session.id),
            player_id: Some(player.id),
            message: "Asha Patel responded".to_string(),
        })
        .await?;

    assert_eq!(notification.recipient, Recipient::coach(coach.id));
    assert_eq!(notification.kind, NotificationKind::ResponseSubmitted);
    assert!(!notification.is_read);
    let summary = notification.session.unwrap();
    assert_eq!(summary.id, session.id);
    assert_eq!(summary.focus_area, FocusArea::Fielding);
    assert_eq!(notification.player.unwrap().name, "Asha Patel");

    Ok(())
}
