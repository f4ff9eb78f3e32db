use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::LoginParams, enums::Role},
    service::auth::AuthService,
    util::token::TokenKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod login;

fn params(username: &str, password: &str) -> LoginParams {
    LoginParams {
        username: username.to_string(),
        password: password.to_string(),
    }
}
