use super::*;

/// Tests the bootstrap check on an empty table.
///
/// Expected: Ok(false) before any admin exists, Ok(true) after one is created
#[tokio::test]
async fn reflects_admin_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    assert!(!repo.any_exists().await?);

    factory::create_admin(db).await?;

    assert!(repo.any_exists().await?);

    Ok(())
}
