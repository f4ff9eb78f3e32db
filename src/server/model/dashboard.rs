//! Aggregates shown on the landing page of each role.

use chrono::{DateTime, Utc};

use crate::{
    model::dashboard::{
        AdminDashboardDto, AdminStatsDto, CoachSummaryDto, DashboardDto, FocusAreaCountDto,
        PlayerSummaryDto, ProgressPointDto, RecentSessionDto,
    },
    server::model::{
        enums::{AcademyLevel, FocusArea, PlayerStatus},
        player::PerformanceHistoryEntry,
        session::SessionWithRoster,
    },
};

/// Window used for "upcoming" sessions.
pub const UPCOMING_WINDOW_DAYS: u64 = 14;

/// Number of sessions shown in the coach and player summaries.
pub const RECENT_LIMIT: u64 = 5;

#[derive(Debug, Clone)]
pub struct AdminStats {
    pub total_players: u64,
    pub total_coaches: u64,
    pub total_sessions: u64,
    pub sessions_by_focus_area: Vec<(FocusArea, u64)>,
    pub upcoming_sessions: u64,
}

impl AdminStats {
    pub fn into_dto(self) -> AdminStatsDto {
        AdminStatsDto {
            total_players: self.total_players,
            total_coaches: self.total_coaches,
            total_sessions: self.total_sessions,
            sessions_by_focus_area: self
                .sessions_by_focus_area
                .into_iter()
                .map(|(focus_area, count)| FocusAreaCountDto {
                    focus_area: focus_area.as_str().to_string(),
                    count,
                })
                .collect(),
            upcoming_sessions: self.upcoming_sessions,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecentSession {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub focus_area: FocusArea,
    pub feedback_count: u64,
}

#[derive(Debug, Clone)]
pub enum Dashboard {
    Admin {
        upcoming_sessions: Vec<SessionWithRoster>,
    },
    Coach {
        name: String,
        total_sessions: u64,
        total_players: u64,
        recent_sessions: Vec<RecentSession>,
    },
    Player {
        name: String,
        academy_level: AcademyLevel,
        status: PlayerStatus,
        recent_progress: Vec<PerformanceHistoryEntry>,
    },
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        match self {
            Dashboard::Admin { upcoming_sessions } => DashboardDto::Admin(AdminDashboardDto {
                upcoming_sessions: upcoming_sessions
                    .into_iter()
                    .map(SessionWithRoster::into_dto)
                    .collect(),
            }),
            Dashboard::Coach {
                name,
                total_sessions,
                total_players,
                recent_sessions,
            } => DashboardDto::Coach(CoachSummaryDto {
                name,
                total_sessions,
                total_players,
                recent_sessions: recent_sessions
                    .into_iter()
                    .map(|session| RecentSessionDto {
                        id: session.id,
                        date: session.date,
                        focus_area: session.focus_area.as_str().to_string(),
                        feedback_count: session.feedback_count,
                    })
                    .collect(),
            }),
            Dashboard::Player {
                name,
                academy_level,
                status,
                recent_progress,
            } => DashboardDto::Player(PlayerSummaryDto {
                name,
                academy_level: academy_level.as_str().to_string(),
                status: status.as_str().to_string(),
                recent_progress: recent_progress
                    .into_iter()
                    .map(|entry| ProgressPointDto {
                        session_id: entry.session_id,
                        date: entry.date,
                        focus_area: entry.focus_area.as_str().to_string(),
                        rating: entry.rating.into_dto(),
                    })
                    .collect(),
            }),
        }
    }
}
