use super::*;

/// Tests a partial update.
///
/// Expected: Only the supplied fields change and a new hash replaces the old one
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_coach(db).await?;

    let repo = CoachRepository::new(db);
    let updated = repo
        .update(
            original.id,
            UpdateCoachParams {
                status: Some(CoachStatus::Suspended),
                experience_years: Some(9),
                ..Default::default()
            },
            Some("new-hash".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, CoachStatus::Suspended);
    assert_eq!(updated.experience_years, 9);
    assert_eq!(updated.password_hash, "new-hash");
    assert_eq!(updated.username, original.username);
    assert_eq!(updated.first_name, original.first_name);

    Ok(())
}

/// Tests updating a coach that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CoachRepository::new(db)
        .update(999, UpdateCoachParams::default(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
