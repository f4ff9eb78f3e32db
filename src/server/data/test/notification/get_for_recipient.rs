use super::*;

/// Tests that listing is scoped to both recipient role and id.
///
/// Expected: Only the player's notifications, newest first; a coach sharing the same
/// numeric id sees none of them
#[tokio::test]
async fn scopes_by_role_and_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let older = factory::notification::NotificationFactory::new(db, player.id, "player")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::create_notification(db, player.id, "player").await?;
    factory::create_notification(db, player.id + 100, "player").await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_for_recipient(Recipient::player(player.id)).await?;
    let coach_view = repo
        .get_for_recipient(Recipient {
            role: Role::Coach,
            id: player.id,
        })
        .await?;

    assert_eq!(
        notifications.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert!(coach_view.is_empty());

    Ok(())
}
