use super::*;

/// Tests listing a player's notes.
///
/// Expected: Only that player's notes, newest first, with the coach name resolved
#[tokio::test]
async fn lists_notes_newest_first_with_coach_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::coach::CoachFactory::new(db)
        .first_name("Anil")
        .last_name("Kumble")
        .build()
        .await?;
    let player = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;

    let repo = PlayerNoteRepository::new(db);
    repo.create(player.id, coach.id, "first".to_string()).await?;
    repo.create(player.id, coach.id, "second".to_string()).await?;
    repo.create(other.id, coach.id, "elsewhere".to_string()).await?;

    let notes = repo.get_by_player(player.id).await?;

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].content, "second");
    assert_eq!(notes[1].content, "first");
    assert_eq!(notes[0].coach_name.as_deref(), Some("Anil Kumble"));

    Ok(())
}
