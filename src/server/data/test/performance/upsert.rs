use super::*;

/// Tests inserting a first entry for a player.
///
/// Expected: Ok with the rating and notes stored
#[tokio::test]
async fn inserts_new_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;

    let stored = PerformanceRepository::new(db)
        .upsert(session.id, &entry(player.id, 7, "good"))
        .await?;

    assert_eq!(stored.session_id, session.id);
    assert_eq!(stored.player_id, player.id);
    assert_eq!(stored.rating.batting, Some(7));
    assert_eq!(stored.notes.as_deref(), Some("good"));

    Ok(())
}

/// Tests that a second upsert for the same player replaces the entry.
///
/// Expected: One row holding the latest rating, with the player response kept
#[tokio::test]
async fn replaces_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;
    let session = factory::create_session(db, coach.id, &[player.id]).await?;
    factory::performance::PerformanceFactory::new(db, session.id, player.id)
        .batting(3)
        .player_response(Some("Thanks coach".to_string()))
        .build()
        .await?;

    let mut replacement = entry(player.id, 9, "much better");
    replacement.focus_area = Some(FocusArea::Fielding);
    let stored = PerformanceRepository::new(db)
        .upsert(session.id, &replacement)
        .await?;

    let rows = entity::prelude::Performance::find().count(db).await?;
    assert_eq!(rows, 1);
    assert_eq!(stored.rating.batting, Some(9));
    assert_eq!(stored.rating.bowling, None);
    assert_eq!(stored.focus_area, Some(FocusArea::Fielding));
    assert_eq!(stored.player_response.as_deref(), Some("Thanks coach"));

    Ok(())
}
