use super::*;

/// Tests appending a note about a player.
///
/// Expected: Ok with the note linked to both player and coach
#[tokio::test]
async fn creates_note() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;

    let note = PlayerNoteRepository::new(db)
        .create(player.id, coach.id, "Work on the pull shot".to_string())
        .await?;

    assert_eq!(note.player_id, player.id);
    assert_eq!(note.coach_id, coach.id);
    assert_eq!(note.content, "Work on the pull shot");

    Ok(())
}

/// Tests that a note must reference an existing player.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;

    let result = PlayerNoteRepository::new(db)
        .create(999, coach.id, "Ghost".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
