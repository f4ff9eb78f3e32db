use chrono::{Duration, Utc};

use crate::server::{
    error::AppError,
    model::{admin::Admin, auth::Identity, dashboard::Dashboard, enums::FocusArea},
    service::{
        dashboard::DashboardService,
        test::{coach, player},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod admin_stats;
