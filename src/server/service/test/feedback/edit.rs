use super::*;

/// Tests editing an existing entry.
///
/// Expected: the entry is replaced in place, no notification sent, session flag untouched
#[tokio::test]
async fn replaces_entry_without_notifying() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::performance::PerformanceFactory::new(db, session.id, player.id)
        .batting(4)
        .build()
        .await?;

    let feedback = FeedbackService::new(db, &push)
        .edit(&coach, session.id, vec![entry(player.id, 8)])
        .await?;

    assert_eq!(feedback.entries.len(), 1);
    assert_eq!(feedback.entries[0].rating.batting, Some(8));
    assert!(!feedback.session.feedback_submitted);
    let notifications = NotificationRepository::new(db)
        .get_for_recipient(Recipient::player(player.id))
        .await?;
    assert!(notifications.is_empty());

    Ok(())
}

/// Tests that a single-note upsert keeps an existing player response.
///
/// Expected: new rating stored alongside the earlier response
#[tokio::test]
async fn note_keeps_player_response() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::performance::PerformanceFactory::new(db, session.id, player.id)
        .player_response(Some("Thanks coach".to_string()))
        .build()
        .await?;

    let stored = FeedbackService::new(db, &push)
        .add_note(&coach, session.id, entry(player.id, 6))
        .await?;

    assert_eq!(stored.rating.batting, Some(6));
    assert_eq!(stored.player_response.as_deref(), Some("Thanks coach"));

    Ok(())
}
