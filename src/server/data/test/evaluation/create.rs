use super::*;
use crate::model::evaluation::{AreaFeedbackDto, EvaluationFeedbackDto};

/// Tests creating an evaluation with structured feedback.
///
/// Expected: Ok with the JSON feedback read back into its typed form and flags cleared
#[tokio::test]
async fn creates_evaluation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let player = factory::create_player(db).await?;

    let feedback = serde_json::json!({ "fitness": { "score": 8, "comments": "Strong" } });
    let evaluation = EvaluationRepository::new(db)
        .create(
            player.id,
            coach.id,
            feedback,
            serde_json::json!({}),
            Some("Keep going".to_string()),
        )
        .await?;

    assert_eq!(
        evaluation.feedback,
        EvaluationFeedbackDto {
            fitness: Some(AreaFeedbackDto {
                score: Some(8),
                comments: Some("Strong".to_string()),
            }),
            ..Default::default()
        }
    );
    assert!(!evaluation.player_responded);
    assert!(!evaluation.player_notified);
    assert!(!evaluation.coach_notified);

    Ok(())
}
