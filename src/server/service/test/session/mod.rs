use crate::server::{
    error::AppError,
    model::{
        enums::{DayOfWeek, FocusArea},
        session::{CreateRecurringSessionParams, CreateSessionParams},
    },
    service::session::SessionService,
};
use chrono::{Duration, NaiveTime, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};
