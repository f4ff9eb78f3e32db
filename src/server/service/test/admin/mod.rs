use crate::server::{
    error::AppError, model::admin::CreateAdminParams, service::admin::AdminService,
    util::password::verify_password,
};
use test_utils::{builder::TestBuilder, factory};

mod create_admin;
mod ensure_bootstrap_admin;

fn params(username: &str) -> CreateAdminParams {
    CreateAdminParams {
        username: username.to_string(),
        password: "bootstrap-pw".to_string(),
    }
}
