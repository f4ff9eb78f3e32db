use crate::{
    model::evaluation::{AreaFeedbackDto, EvaluationCategoriesDto, EvaluationFeedbackDto},
    server::{
        data::notification::NotificationRepository,
        error::{auth::AuthError, AppError},
        model::{
            admin::Admin, auth::Identity, enums::NotificationKind,
            evaluation::CreateEvaluationParams, notification::Recipient,
        },
        push::{PushHub, EVENT_NEW_EVALUATION},
        service::{
            evaluation::EvaluationService,
            test::{coach, player},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod list_by_player;
mod respond;

fn params(player_id: i32, coach_id: Option<i32>) -> CreateEvaluationParams {
    CreateEvaluationParams {
        player_id,
        coach_id,
        feedback: EvaluationFeedbackDto {
            batting: Some(AreaFeedbackDto {
                score: Some(8),
                comments: Some("Solid defence".to_string()),
            }),
            ..Default::default()
        },
        categories: EvaluationCategoriesDto::default(),
        coach_comments: Some("Ready for the next level".to_string()),
    }
}

async fn admin(db: &sea_orm::DatabaseConnection) -> Result<Identity, AppError> {
    Ok(Identity::Admin(Admin::from_entity(
        factory::create_admin(db).await?,
    )))
}
