use crate::server::{
    data::notification::NotificationRepository,
    model::{
        enums::{FocusArea, NotificationKind, Role},
        notification::{CreateNotificationParams, Recipient},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_recipient;
