use super::*;

/// Tests id generation on an empty table.
///
/// Expected: CCH1001
#[tokio::test]
async fn starts_after_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = CoachRepository::new(db).next_coach_id().await?;

    assert_eq!(id, "CCH1001");

    Ok(())
}

/// Tests that a taken candidate is skipped.
///
/// Expected: CCH1003 when one coach exists and already holds CCH1002
#[tokio::test]
async fn skips_taken_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::coach::CoachFactory::new(db)
        .coach_id("CCH1002")
        .build()
        .await?;

    let id = CoachRepository::new(db).next_coach_id().await?;

    assert_eq!(id, "CCH1003");

    Ok(())
}
