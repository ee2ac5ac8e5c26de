//! `StatsSource` backed by the provider's HTTP/JSON API

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::{RetryPolicy, fetch};
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_boxscore_url, build_player_season_url, build_player_url, build_team_schedule_url,
};
use crate::config::Config;
use crate::config::validation::normalize_api_domain;
use crate::data_fetcher::models::{
    BoxScore, PlayerProfile, ScheduleEntry, ScheduleResponse, ScheduleView, SeasonProfile,
};
use crate::data_fetcher::source::StatsSource;
use crate::error::AppError;
use crate::season::Season;

#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: Client,
    api_domain: String,
    retry_policy: RetryPolicy,
}

impl HttpStatsSource {
    pub fn new(client: Client, api_domain: impl Into<String>) -> Self {
        HttpStatsSource {
            client,
            api_domain: api_domain.into(),
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Builds a source with a pooled client using the configured timeout.
    /// A domain without a scheme is given `https://`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, normalize_api_domain(&config.api_domain)))
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    #[instrument(skip(self))]
    async fn lookup_player(&self, player_id: &str) -> Result<PlayerProfile, AppError> {
        let url = build_player_url(&self.api_domain, player_id);
        fetch(&self.client, &url, self.retry_policy)
            .await
            .map_err(|e| match e {
                AppError::ApiNotFound { .. } => AppError::player_not_found(player_id),
                other => other,
            })
    }

    #[instrument(skip(self), fields(season = %season))]
    async fn profile_for_season(
        &self,
        player_id: &str,
        season: Season,
    ) -> Result<SeasonProfile, AppError> {
        let label = season.label();
        let url = build_player_season_url(&self.api_domain, player_id, &label);
        fetch(&self.client, &url, self.retry_policy)
            .await
            .map_err(|e| match e {
                AppError::ApiNotFound { .. } => AppError::season_not_found(player_id, label),
                other => other,
            })
    }

    #[instrument(skip(self))]
    async fn lookup_team_schedule(
        &self,
        team: &str,
        season_year: i32,
    ) -> Result<ScheduleView, AppError> {
        let url = build_team_schedule_url(&self.api_domain, team, season_year);
        let response: ScheduleResponse = fetch(&self.client, &url, self.retry_policy)
            .await
            .map_err(|e| match e {
                AppError::ApiNotFound { .. } => AppError::schedule_not_found(team, season_year),
                other => other,
            })?;
        debug!("Schedule for {team} {season_year} has {} games", response.games.len());
        Ok(ScheduleView::new(team, season_year, response))
    }

    #[instrument(skip(self, entry), fields(boxscore_id = %entry.boxscore_id))]
    async fn lookup_boxscore(&self, entry: &ScheduleEntry) -> Result<BoxScore, AppError> {
        let url = build_boxscore_url(&self.api_domain, &entry.boxscore_id);
        fetch(&self.client, &url, self.retry_policy)
            .await
            .map_err(|e| match e {
                // Scheduled but never played (postponed or cancelled)
                AppError::ApiNotFound { .. } => {
                    AppError::no_game_on_date(&entry.team, entry.date)
                }
                other => other,
            })
    }

    fn name(&self) -> &str {
        "http"
    }
}
