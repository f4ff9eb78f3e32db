use super::*;

/// Tests listing a player's evaluations.
///
/// Expected: Only that player's evaluations, newest first, with coach name resolved
#[tokio::test]
async fn lists_newest_first_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::coach::CoachFactory::new(db)
        .first_name("Anil")
        .last_name("Kumble")
        .build()
        .await?;
    let player = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;

    let older = factory::evaluation::EvaluationFactory::new(db, player.id, coach.id)
        .date_of_evaluation(Utc::now() - Duration::days(30))
        .build()
        .await?;
    let newer = factory::create_evaluation(db, player.id, coach.id).await?;
    factory::create_evaluation(db, other.id, coach.id).await?;

    let repo = EvaluationRepository::new(db);
    let evaluations = repo.get_by_player(player.id).await?;

    assert_eq!(
        evaluations.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(evaluations[0].coach_name.as_deref(), Some("Anil Kumble"));
    assert!(evaluations[0].player_name.is_some());
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
