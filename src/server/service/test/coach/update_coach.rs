use super::*;

/// Tests that keeping one's own username is not a conflict.
///
/// Expected: Ok with the new first name
#[tokio::test]
async fn allows_own_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::coach::CoachFactory::new(db)
        .username("rahul")
        .build()
        .await?;

    let updated = CoachService::new(db)
        .update_coach(
            coach.id,
            UpdateCoachParams {
                username: Some("rahul".to_string()),
                first_name: Some("Rahul".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Rahul");

    Ok(())
}

/// Tests taking another coach's username.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_username_of_other_coach() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::coach::CoachFactory::new(db)
        .username("taken")
        .build()
        .await?;
    let coach = factory::create_coach(db).await?;

    let result = CoachService::new(db)
        .update_coach(
            coach.id,
            UpdateCoachParams {
                username: Some("taken".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a coach that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_coach() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoachService::new(db)
        .update_coach(999, UpdateCoachParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
