use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Career numbers scraped from the external club site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsDto {
    pub name: String,
    pub games_played: u32,
    pub total_runs: u32,
    pub total_wickets: u32,
}
