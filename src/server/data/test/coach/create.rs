use super::*;

/// Tests creating a coach and reading it back by each unique key.
///
/// Expected: Ok with the coach found by row id, external id and username
#[tokio::test]
async fn creates_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoachRepository::new(db);
    let coach = repo
        .create("CCH1001".to_string(), "hash".to_string(), params("rahul"))
        .await?;

    assert_eq!(coach.specialty, CoachSpecialty::Batting);
    assert_eq!(coach.full_name(), "Rahul Dravid");
    assert_eq!(repo.find_by_id(coach.id).await?.map(|c| c.id), Some(coach.id));
    assert_eq!(
        repo.find_by_coach_id("CCH1001").await?.map(|c| c.id),
        Some(coach.id)
    );
    assert_eq!(
        repo.find_by_username("rahul").await?.map(|c| c.id),
        Some(coach.id)
    );

    Ok(())
}

/// Tests that external coach ids are unique.
///
/// Expected: Err when inserting a second coach with the same coach id
#[tokio::test]
async fn rejects_duplicate_coach_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CoachRepository::new(db);
    repo.create("CCH1001".to_string(), "hash".to_string(), params("one"))
        .await?;
    let result = repo
        .create("CCH1001".to_string(), "hash".to_string(), params("two"))
        .await;

    assert!(result.is_err());

    Ok(())
}
