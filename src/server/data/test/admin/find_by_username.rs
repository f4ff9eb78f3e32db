use super::*;

/// Tests looking up an admin by username.
///
/// Expected: Ok(Some) for the stored username, Ok(None) otherwise
#[tokio::test]
async fn finds_only_matching_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::admin::AdminFactory::new(db)
        .username("headcoach")
        .build()
        .await?;

    let repo = AdminRepository::new(db);
    let found = repo.find_by_username("headcoach").await?;

    assert_eq!(found.map(|a| a.id), Some(created.id));
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}
