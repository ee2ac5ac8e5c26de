use serde::{Deserialize, Serialize};

/// Counted statistics as the provider reports them, either for one game or
/// summed over a season or career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CountingStats {
    pub points: u32,
    pub assists: u32,
    #[serde(rename = "offensiveRebounds")]
    pub offensive_rebounds: u32,
    #[serde(rename = "defensiveRebounds")]
    pub defensive_rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
}

/// Raw counts for a single game (or an aggregate over at most one game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatRecord {
    pub points: u32,
    pub assists: u32,
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
}

impl From<&CountingStats> for GameStatRecord {
    fn from(stats: &CountingStats) -> Self {
        GameStatRecord {
            points: stats.points,
            assists: stats.assists,
            offensive_rebounds: stats.offensive_rebounds,
            defensive_rebounds: stats.defensive_rebounds,
            steals: stats.steals,
            blocks: stats.blocks,
            turnovers: stats.turnovers,
        }
    }
}

/// Per-game averages over more than one game. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatRecord {
    pub ppg: f64,
    pub apg: f64,
    pub orpg: f64,
    pub drpg: f64,
    pub spg: f64,
    pub bpg: f64,
    pub tpg: f64,
}

/// Result of aggregating counted totals over a number of games.
///
/// Serializes as a flat object carrying only the key set of its variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatRecord {
    Counts(GameStatRecord),
    Averages(AggregateStatRecord),
}

impl StatRecord {
    /// Category labels and display values, in a fixed order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            StatRecord::Counts(record) => record.rows(),
            StatRecord::Averages(record) => record.rows(),
        }
    }
}

impl GameStatRecord {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Points", self.points.to_string()),
            ("Assists", self.assists.to_string()),
            ("Offensive rebounds", self.offensive_rebounds.to_string()),
            ("Defensive rebounds", self.defensive_rebounds.to_string()),
            ("Steals", self.steals.to_string()),
            ("Blocks", self.blocks.to_string()),
            ("Turnovers", self.turnovers.to_string()),
        ]
    }
}

impl AggregateStatRecord {
    // Display only; the record itself keeps full precision.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Points per game", format!("{:.1}", self.ppg)),
            ("Assists per game", format!("{:.1}", self.apg)),
            ("Offensive rebounds per game", format!("{:.1}", self.orpg)),
            ("Defensive rebounds per game", format!("{:.1}", self.drpg)),
            ("Steals per game", format!("{:.1}", self.spg)),
            ("Blocks per game", format!("{:.1}", self.bpg)),
            ("Turnovers per game", format!("{:.1}", self.tpg)),
        ]
    }
}
