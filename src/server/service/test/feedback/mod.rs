use crate::server::{
    data::{
        notification::NotificationRepository, performance::PerformanceRepository,
        session::SessionRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::Identity,
        enums::NotificationKind,
        notification::Recipient,
        performance::{FeedbackEntryParams, Rating},
    },
    push::{PushHub, EVENT_NEW_FEEDBACK, EVENT_NEW_PLAYER_RESPONSE},
    service::{
        feedback::FeedbackService,
        test::{coach, player},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod edit;
mod feedback_for;
mod respond;

fn entry(player_id: i32, batting: i32) -> FeedbackEntryParams {
    FeedbackEntryParams {
        player_id,
        rating: Rating {
            batting: Some(batting),
            ..Default::default()
        },
        notes: Some(format!("batting {}", batting)),
        focus_area: None,
    }
}
