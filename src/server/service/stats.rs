//! Career numbers scraped from the external club site.
//!
//! The lookup never fails: any transport error, non-success status or unreadable body
//! yields the "Unavailable" placeholder.

use std::{sync::LazyLock, time::Duration};

use regex::Regex;

use crate::server::model::stats::PlayerStats;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const UNKNOWN_NAME: &str = "Unknown";

static PLAYER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<h3[^>]*class\s*=\s*["'][^"']*\bplayer-name\b[^"']*["'][^>]*>(.*?)</h3>"#)
        .expect("player name pattern is a valid regex")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

static GAMES_PLAYED: LazyLock<Regex> = LazyLock::new(|| counter_pattern("gamesPlayed"));
static TOTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| counter_pattern("totalRuns"));
static TOTAL_WICKETS: LazyLock<Regex> = LazyLock::new(|| counter_pattern("totalWickets"));

/// Matches the text of the element carrying the given `id`.
fn counter_pattern(id: &str) -> Regex {
    Regex::new(&format!(r#"(?is)id\s*=\s*["']{}["'][^>]*>(.*?)</"#, id))
        .expect("counter pattern is a valid regex")
}

pub struct StatsService<'a> {
    client: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> StatsService<'a> {
    pub fn new(client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Fetches and parses the player's public page.
    ///
    /// # Arguments
    /// - `cricclubs_id` - Player id on the external site
    ///
    /// # Returns
    /// - `PlayerStats` - Parsed numbers, or the placeholder when the page is unreachable
    pub async fn lookup(&self, cricclubs_id: &str) -> PlayerStats {
        match self.fetch(cricclubs_id).await {
            Ok(html) => parse_stats_page(&html),
            Err(e) => {
                tracing::warn!("Stats lookup for {} failed: {}", cricclubs_id, e);
                PlayerStats::unavailable()
            }
        }
    }

    async fn fetch(&self, cricclubs_id: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(format!("{}/viewPlayer.do", self.base_url))
            .query(&[("playerId", cricclubs_id)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

/// Extracts the name and counters from a player page.
///
/// Missing or non-numeric counters read as 0; thousands separators are ignored. A
/// missing or empty name reads as "Unknown".
pub fn parse_stats_page(html: &str) -> PlayerStats {
    let name = PLAYER_NAME
        .captures(html)
        .map(|captures| text_content(&captures[1]))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    PlayerStats {
        name,
        games_played: counter(html, &GAMES_PLAYED),
        total_runs: counter(html, &TOTAL_RUNS),
        total_wickets: counter(html, &TOTAL_WICKETS),
    }
}

fn counter(html: &str, element: &Regex) -> u32 {
    element
        .captures(html)
        .map(|captures| leading_number(&text_content(&captures[1])))
        .unwrap_or(0)
}

fn text_content(fragment: &str) -> String {
    let text = TAG.replace_all(fragment, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn leading_number(text: &str) -> u32 {
    let digits: String = text
        .chars()
        .filter(|c| *c != ',')
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().unwrap_or(0)
}
