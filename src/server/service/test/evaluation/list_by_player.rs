use super::*;

/// Tests a player listing their own evaluations and someone else's.
///
/// Expected: own list returned; another player's list is Err(AccessDenied)
#[tokio::test]
async fn players_list_only_their_own() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let me = player(db).await?;
    let other = player(db).await?;
    factory::create_evaluation(db, me.id, coach.id).await?;
    factory::create_evaluation(db, other.id, coach.id).await?;

    let service = EvaluationService::new(db, &push);
    let caller = Identity::Player(me.clone());
    let own = service.list_by_player(&caller, me.id).await?;
    let foreign = service.list_by_player(&caller, other.id).await;

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].player_id, me.id);
    assert!(matches!(
        foreign,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}

/// Tests a coach listing any player's evaluations.
///
/// Expected: Ok with the coach name resolved
#[tokio::test]
async fn coaches_list_any_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = PushHub::new();

    let coach = coach(db).await?;
    let player = player(db).await?;
    factory::create_evaluation(db, player.id, coach.id).await?;

    let list = EvaluationService::new(db, &push)
        .list_by_player(&Identity::Coach(coach.clone()), player.id)
        .await?;

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].coach_name, Some(coach.full_name()));

    Ok(())
}
