use super::*;

/// Tests creating an admin account.
///
/// Expected: Ok with the admin stored under the given username
#[tokio::test]
async fn creates_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admin = repo
        .create("root".to_string(), "hash".to_string())
        .await?;

    assert_eq!(admin.username, "root");
    assert_eq!(admin.password_hash, "hash");
    assert!(repo.find_by_id(admin.id).await?.is_some());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    repo.create("root".to_string(), "hash".to_string()).await?;
    let result = repo.create("root".to_string(), "other".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
