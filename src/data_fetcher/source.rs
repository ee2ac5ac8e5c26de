//! Query interface of the external statistics provider

use async_trait::async_trait;

use crate::data_fetcher::models::{
    BoxScore, PlayerProfile, ScheduleEntry, ScheduleView, SeasonProfile,
};
use crate::error::AppError;
use crate::season::Season;

/// Lookups the resolver needs from a statistics provider.
///
/// Implementations report "nothing on record" through the domain errors
/// (`SeasonNotFound`, `NoGameOnDate`, ...) and transport problems through the
/// network/API variants, so callers can tell the two apart.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Career profile of the athlete identified by `player_id`.
    async fn lookup_player(&self, player_id: &str) -> Result<PlayerProfile, AppError>;

    /// Profile of the athlete scoped to `season`, including team affiliation.
    async fn profile_for_season(
        &self,
        player_id: &str,
        season: Season,
    ) -> Result<SeasonProfile, AppError>;

    /// Full-season schedule of `team` for the season ending in `season_year`.
    async fn lookup_team_schedule(
        &self,
        team: &str,
        season_year: i32,
    ) -> Result<ScheduleView, AppError>;

    /// Box score of the game behind a schedule entry.
    async fn lookup_boxscore(&self, entry: &ScheduleEntry) -> Result<BoxScore, AppError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
