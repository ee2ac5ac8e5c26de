//! Date, season and career resolution for the tracked athlete
//!
//! `StatResolver` translates a calendar date into the athlete's box-score line
//! for that day, and a season or the whole career into per-game averages. It
//! holds no mutable state; every call goes back to the `StatsSource`.

use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::data_fetcher::models::{AggregateStatRecord, CountingStats, GameStatRecord, StatRecord};
use crate::data_fetcher::source::StatsSource;
use crate::error::AppError;
use crate::season::Season;

/// Opaque provider key of an athlete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId::new(id)
    }
}

#[derive(Clone)]
pub struct StatResolver {
    player_id: PlayerId,
    source: Arc<dyn StatsSource>,
}

impl fmt::Debug for StatResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatResolver")
            .field("player_id", &self.player_id)
            .field("source", &self.source.name())
            .finish()
    }
}

impl StatResolver {
    pub fn new(player_id: PlayerId, source: Arc<dyn StatsSource>) -> Self {
        StatResolver { player_id, source }
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    /// Returns the athlete's stat line for the game played on `date`.
    ///
    /// `Ok(None)` means the athlete did not play that day: the team had no
    /// game, the date is outside the athlete's career, or the athlete does not
    /// appear in the box score (inactive or injured). Provider failures are
    /// returned as errors and never collapse into `None`.
    #[instrument(skip(self), fields(player = %self.player_id))]
    pub async fn game_stats(&self, date: NaiveDate) -> Result<Option<GameStatRecord>, AppError> {
        let season = Season::containing(date);

        match self.find_game_line(date, season).await {
            Ok(record) => Ok(record),
            Err(e) if e.is_no_game() => {
                info!("No game for {} on {}: {}", self.player_id, date, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn find_game_line(
        &self,
        date: NaiveDate,
        season: Season,
    ) -> Result<Option<GameStatRecord>, AppError> {
        let profile = self
            .source
            .profile_for_season(self.player_id.as_str(), season)
            .await?;
        let schedule = self
            .source
            .lookup_team_schedule(&profile.team_abbreviation, season.year())
            .await?;
        let entry = schedule.game_on(date)?;
        let boxscore = self.source.lookup_boxscore(entry).await?;

        match boxscore.find_player(&profile.name) {
            Some(line) => {
                debug!(
                    "Matched {} in box score {}",
                    profile.name, boxscore.boxscore_id
                );
                Ok(Some(GameStatRecord::from(&line.stats)))
            }
            None => {
                info!(
                    "{} did not appear in box score {} ({} vs {})",
                    profile.name, boxscore.boxscore_id, boxscore.away_team, boxscore.home_team
                );
                Ok(None)
            }
        }
    }

    /// Aggregates the season ending in calendar year `year`.
    #[instrument(skip(self), fields(player = %self.player_id))]
    pub async fn season_stats(&self, year: i32) -> Result<StatRecord, AppError> {
        let season = Season::ending_in(year)?;
        let profile = self
            .source
            .profile_for_season(self.player_id.as_str(), season)
            .await?;
        Ok(aggregate(&profile.totals, profile.games_played))
    }

    /// Aggregates the athlete's whole career.
    #[instrument(skip(self), fields(player = %self.player_id))]
    pub async fn career_stats(&self) -> Result<StatRecord, AppError> {
        let profile = self.source.lookup_player(self.player_id.as_str()).await?;
        Ok(aggregate(&profile.totals, profile.games_played))
    }
}

/// Turns counted totals over `games` games into a record.
///
/// At most one game yields the raw counts unchanged. More than one yields
/// per-game averages (`total / games`, unrounded) and drops the raw counts.
pub fn aggregate(totals: &CountingStats, games: u32) -> StatRecord {
    if games <= 1 {
        return StatRecord::Counts(GameStatRecord::from(totals));
    }

    let n = f64::from(games);
    StatRecord::Averages(AggregateStatRecord {
        ppg: f64::from(totals.points) / n,
        apg: f64::from(totals.assists) / n,
        orpg: f64::from(totals.offensive_rebounds) / n,
        drpg: f64::from(totals.defensive_rebounds) / n,
        spg: f64::from(totals.steals) / n,
        bpg: f64::from(totals.blocks) / n,
        tpg: f64::from(totals.turnovers) / n,
    })
}
