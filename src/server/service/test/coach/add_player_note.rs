use super::*;
use crate::server::service::test::{coach, player};

/// Tests appending a note to an existing player.
///
/// Expected: Ok with trimmed content and the author's name attached
#[tokio::test]
async fn stores_note_with_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = coach(db).await?;
    let player = player(db).await?;

    let note = CoachService::new(db)
        .add_player_note(&coach, player.id, "  Keep the head still  ")
        .await?;

    assert_eq!(note.content, "Keep the head still");
    assert_eq!(note.coach_name, Some(coach.full_name()));
    assert_eq!(note.player_id, player.id);

    Ok(())
}

/// Tests a note for a player that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = coach(db).await?;

    let result = CoachService::new(db)
        .add_player_note(&coach, 999, "Good session")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a blank note.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = coach(db).await?;
    let player = player(db).await?;

    let result = CoachService::new(db)
        .add_player_note(&coach, player.id, "   ")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
