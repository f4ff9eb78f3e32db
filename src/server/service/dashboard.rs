//! Role-specific landing page aggregates.

use chrono::{DateTime, Days, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        coach::CoachRepository, performance::PerformanceRepository, player::PlayerRepository,
        session::SessionRepository,
    },
    error::AppError,
    model::{
        auth::Identity,
        dashboard::{AdminStats, Dashboard, RecentSession, RECENT_LIMIT, UPCOMING_WINDOW_DAYS},
        player::PerformanceHistoryEntry,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Academy-wide totals for the admin dashboard.
    ///
    /// Focus areas without sessions are omitted from the breakdown.
    pub async fn admin_stats(&self) -> Result<AdminStats, AppError> {
        let session_repo = SessionRepository::new(self.db);
        let (from, to) = upcoming_window()?;

        Ok(AdminStats {
            total_players: PlayerRepository::new(self.db).count().await?,
            total_coaches: CoachRepository::new(self.db).count().await?,
            total_sessions: session_repo.count().await?,
            sessions_by_focus_area: session_repo.count_by_focus_area().await?,
            upcoming_sessions: session_repo.count_between(from, to).await?,
        })
    }

    /// Summary for the caller's role.
    ///
    /// - admin: sessions starting within the upcoming window
    /// - coach: totals and the most recent sessions with their entry counts
    /// - player: profile fields and ratings from the most recent rated sessions
    pub async fn dashboard(&self, identity: &Identity) -> Result<Dashboard, AppError> {
        let session_repo = SessionRepository::new(self.db);

        match identity {
            Identity::Admin(_) => {
                let (from, to) = upcoming_window()?;
                let sessions = session_repo.get_between(from, to).await?;

                Ok(Dashboard::Admin {
                    upcoming_sessions: session_repo.with_rosters(sessions).await?,
                })
            }
            Identity::Coach(coach) => {
                let performance_repo = PerformanceRepository::new(self.db);
                let recent = session_repo
                    .get_by_coach(coach.id, Some(RECENT_LIMIT))
                    .await?;

                let mut recent_sessions = Vec::with_capacity(recent.len());
                for session in recent {
                    recent_sessions.push(RecentSession {
                        id: session.id,
                        date: session.date,
                        focus_area: session.focus_area,
                        feedback_count: performance_repo.count_by_session(session.id).await?,
                    });
                }

                Ok(Dashboard::Coach {
                    name: coach.full_name(),
                    total_sessions: session_repo.count_by_coach(coach.id).await?,
                    total_players: session_repo.count_players_for_coach(coach.id).await?,
                    recent_sessions,
                })
            }
            Identity::Player(player) => {
                let recent_progress = PerformanceRepository::new(self.db)
                    .get_history(player.id, Some(RECENT_LIMIT as usize))
                    .await?
                    .into_iter()
                    .map(|(entry, session)| PerformanceHistoryEntry::new(entry, &session))
                    .collect();

                Ok(Dashboard::Player {
                    name: player.full_name(),
                    academy_level: player.academy_level,
                    status: player.status,
                    recent_progress,
                })
            }
        }
    }
}

fn upcoming_window() -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let now = Utc::now();
    let to = now
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .ok_or_else(|| AppError::InternalError("Upcoming window overflowed".to_string()))?;

    Ok((now, to))
}
