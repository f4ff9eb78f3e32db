use super::*;

/// Tests that the stored credential is a hash of the supplied password.
///
/// Expected: Ok with a verifiable Argon2 hash
#[tokio::test]
async fn hashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = AdminService::new(db).create_admin(params("root")).await?;

    assert_ne!(admin.password_hash, "bootstrap-pw");
    assert!(verify_password("bootstrap-pw", &admin.password_hash)?);

    Ok(())
}

/// Tests creating an admin with a taken username.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::AdminFactory::new(db)
        .username("root")
        .build()
        .await?;

    let result = AdminService::new(db).create_admin(params("root")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
