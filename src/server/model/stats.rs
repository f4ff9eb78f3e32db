use crate::model::stats::PlayerStatsDto;

/// Name reported whenever the external lookup fails.
pub const UNAVAILABLE: &str = "Unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub name: String,
    pub games_played: u32,
    pub total_runs: u32,
    pub total_wickets: u32,
}

impl PlayerStats {
    pub fn unavailable() -> Self {
        Self {
            name: UNAVAILABLE.to_string(),
            games_played: 0,
            total_runs: 0,
            total_wickets: 0,
        }
    }

    pub fn into_dto(self) -> PlayerStatsDto {
        PlayerStatsDto {
            name: self.name,
            games_played: self.games_played,
            total_runs: self.total_runs,
            total_wickets: self.total_wickets,
        }
    }
}
