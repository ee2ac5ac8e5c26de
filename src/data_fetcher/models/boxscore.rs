use super::stats::CountingStats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One player's stat line in a box score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScorePlayer {
    pub name: String,
    #[serde(flatten)]
    pub stats: CountingStats,
}

/// Per-player lines for both teams in one played game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxScore {
    #[serde(rename = "boxscoreId")]
    pub boxscore_id: String,
    pub date: NaiveDate,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    #[serde(rename = "homePlayers", default)]
    pub home_players: Vec<BoxScorePlayer>,
    #[serde(rename = "awayPlayers", default)]
    pub away_players: Vec<BoxScorePlayer>,
}

impl BoxScore {
    /// Both rosters combined, away players first.
    pub fn players(&self) -> impl Iterator<Item = &BoxScorePlayer> {
        self.away_players.iter().chain(self.home_players.iter())
    }

    /// The line whose name matches `name` exactly.
    pub fn find_player(&self, name: &str) -> Option<&BoxScorePlayer> {
        self.players().find(|player| player.name == name)
    }
}
