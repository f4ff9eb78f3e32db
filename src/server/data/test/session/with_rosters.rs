use super::*;

/// Tests resolving coach names and rosters.
///
/// Expected: Order preserved, coach name resolved and roster names sorted
#[tokio::test]
async fn resolves_coach_and_roster_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::coach::CoachFactory::new(db)
        .first_name("Rahul")
        .last_name("Dravid")
        .build()
        .await?;
    let zara = factory::player::PlayerFactory::new(db)
        .first_name("Zara")
        .last_name("Khan")
        .build()
        .await?;
    let amit = factory::player::PlayerFactory::new(db)
        .first_name("Amit")
        .last_name("Rao")
        .build()
        .await?;

    factory::create_session(db, coach.id, &[zara.id, amit.id]).await?;
    factory::create_session(db, coach.id, &[]).await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.get_all().await?;
    let ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
    let resolved = repo.with_rosters(sessions).await?;

    assert_eq!(resolved.iter().map(|s| s.session.id).collect::<Vec<_>>(), ids);
    let with_players = resolved.iter().find(|s| !s.players.is_empty()).unwrap();
    assert_eq!(with_players.coach_name.as_deref(), Some("Rahul Dravid"));
    assert_eq!(
        with_players
            .players
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Amit Rao", "Zara Khan"]
    );

    Ok(())
}
