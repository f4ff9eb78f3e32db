use super::*;

/// Tests bootstrapping into an empty admin table.
///
/// Expected: Ok(Some) with the configured username
#[tokio::test]
async fn creates_admin_when_none_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = AdminService::new(db)
        .ensure_bootstrap_admin(params("root"))
        .await?;

    assert_eq!(created.map(|admin| admin.username), Some("root".to_string()));

    Ok(())
}

/// Tests bootstrapping when an admin already exists.
///
/// Expected: Ok(None) and no second admin
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let created = AdminService::new(db)
        .ensure_bootstrap_admin(params("root"))
        .await?;

    assert!(created.is_none());

    Ok(())
}
