use crate::server::{
    error::AppError,
    model::{
        enums::NotificationKind,
        notification::{CreateNotificationParams, Recipient},
    },
    push::{PushHub, EVENT_NEW_FEEDBACK},
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod mark_read;
mod notify;
