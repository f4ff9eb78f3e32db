use super::*;

/// Tests creating a single session with a roster.
///
/// Expected: Ok with default flags and both players on the roster
#[tokio::test]
async fn creates_session_with_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    let repo = SessionRepository::new(db);
    let session = repo
        .create(
            NewSession {
                date: Utc::now() + Duration::days(2),
                focus_area: FocusArea::Bowling,
                coach_id: coach.id,
                notes: Some("Yorkers".to_string()),
                recurrence: None,
            },
            &[first.id, second.id],
        )
        .await?;

    assert_eq!(session.focus_area, FocusArea::Bowling);
    assert!(!session.feedback_submitted);
    assert!(!session.is_recurring);
    assert!(session.recurrence_group_id.is_none());

    let mut roster = repo.roster_ids(session.id).await?;
    roster.sort();
    assert_eq!(roster, vec![first.id, second.id]);

    Ok(())
}

/// Tests that the recurrence descriptor is stored.
///
/// Expected: Ok with is_recurring set and day, time, duration and group persisted
#[tokio::test]
async fn stores_recurrence_descriptor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;

    let session = SessionRepository::new(db)
        .create(
            NewSession {
                date: Utc::now(),
                focus_area: FocusArea::Fitness,
                coach_id: coach.id,
                notes: None,
                recurrence: Some(Recurrence {
                    day_of_week: DayOfWeek::Tuesday,
                    time: NaiveTime::from_hms_opt(6, 45, 0).unwrap(),
                    duration_minutes: 60,
                    group_id: "group-a".to_string(),
                }),
            },
            &[],
        )
        .await?;

    assert!(session.is_recurring);
    assert_eq!(session.day_of_week, Some(DayOfWeek::Tuesday));
    assert_eq!(session.time.as_deref(), Some("06:45"));
    assert_eq!(session.duration_minutes, Some(60));
    assert_eq!(session.recurrence_group_id.as_deref(), Some("group-a"));

    Ok(())
}

/// Tests that a session must reference an existing coach.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SessionRepository::new(db)
        .create(
            NewSession {
                date: Utc::now(),
                focus_area: FocusArea::Batting,
                coach_id: 77,
                notes: None,
                recurrence: None,
            },
            &[],
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
