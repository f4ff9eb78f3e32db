use super::*;

/// Tests login for each role with stored credentials.
///
/// Expected: Ok with a token whose role claim matches the login endpoint
#[tokio::test]
async fn issues_token_carrying_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 3600);

    let admin = factory::admin::AdminFactory::new(db)
        .username("root")
        .password("pw-admin")
        .build()
        .await?;
    let coach = factory::coach::CoachFactory::new(db)
        .username("coach.kumar")
        .password("pw-coach")
        .build()
        .await?;
    let player = factory::player::PlayerFactory::new(db)
        .username("asha")
        .password("pw-player")
        .build()
        .await?;

    let service = AuthService::new(db, &keys);
    for (role, username, password, id) in [
        (Role::Admin, "root", "pw-admin", admin.id),
        (Role::Coach, "coach.kumar", "pw-coach", coach.id),
        (Role::Player, "asha", "pw-player", player.id),
    ] {
        let result = service.login(role, params(username, password)).await?;

        assert_eq!(result.role, role);
        assert_eq!(result.id, id);
        assert_eq!(keys.verify(&result.token).unwrap(), (id, role));
    }

    Ok(())
}

/// Tests that a wrong password and an unknown user are indistinguishable.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 3600);

    factory::coach::CoachFactory::new(db)
        .username("coach.kumar")
        .password("right")
        .build()
        .await?;

    let service = AuthService::new(db, &keys);
    let wrong_password = service
        .login(Role::Coach, params("coach.kumar", "wrong"))
        .await;
    let unknown_user = service.login(Role::Coach, params("nobody", "right")).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that credentials are checked against the endpoint's role table only.
///
/// Expected: Err(InvalidCredentials) when a coach logs in through the player endpoint
#[tokio::test]
async fn checks_only_the_role_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 3600);

    factory::coach::CoachFactory::new(db)
        .username("coach.kumar")
        .password("right")
        .build()
        .await?;

    let result = AuthService::new(db, &keys)
        .login(Role::Player, params("coach.kumar", "right"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
