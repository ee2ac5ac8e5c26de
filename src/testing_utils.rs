use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::data_fetcher::models::{
    BoxScore, BoxScorePlayer, CountingStats, Location, PlayerProfile, ScheduleEntry,
    ScheduleResponse, ScheduleView, SeasonProfile,
};
use crate::data_fetcher::source::StatsSource;
use crate::error::AppError;
use crate::season::Season;

/// In-memory `StatsSource` for tests. Records every lookup it serves.
#[derive(Clone, Default)]
pub struct FakeStatsSource {
    career: Option<PlayerProfile>,
    seasons: HashMap<String, SeasonProfile>,
    schedules: HashMap<(String, i32), ScheduleResponse>,
    boxscores: HashMap<String, BoxScore>,
    schedule_failure: Option<fn() -> AppError>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeStatsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_career(mut self, profile: PlayerProfile) -> Self {
        self.career = Some(profile);
        self
    }

    pub fn with_season(mut self, profile: SeasonProfile) -> Self {
        self.seasons.insert(profile.season.clone(), profile);
        self
    }

    pub fn with_schedule(
        mut self,
        team: &str,
        season_year: i32,
        games: Vec<ScheduleEntry>,
    ) -> Self {
        self.schedules
            .insert((team.to_string(), season_year), ScheduleResponse { games });
        self
    }

    pub fn with_boxscore(mut self, boxscore: BoxScore) -> Self {
        self.boxscores.insert(boxscore.boxscore_id.clone(), boxscore);
        self
    }

    /// Makes every schedule lookup fail with the error built by `make_error`.
    pub fn failing_schedule(mut self, make_error: fn() -> AppError) -> Self {
        self.schedule_failure = Some(make_error);
        self
    }

    /// Lookups served so far, e.g. `schedule:CLE:2007`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl StatsSource for FakeStatsSource {
    async fn lookup_player(&self, player_id: &str) -> Result<PlayerProfile, AppError> {
        self.record(format!("player:{player_id}"));
        self.career
            .clone()
            .filter(|profile| profile.id == player_id)
            .ok_or_else(|| AppError::player_not_found(player_id))
    }

    async fn profile_for_season(
        &self,
        player_id: &str,
        season: Season,
    ) -> Result<SeasonProfile, AppError> {
        let label = season.label();
        self.record(format!("season:{player_id}:{label}"));
        self.seasons
            .get(&label)
            .cloned()
            .ok_or_else(|| AppError::season_not_found(player_id, label))
    }

    async fn lookup_team_schedule(
        &self,
        team: &str,
        season_year: i32,
    ) -> Result<ScheduleView, AppError> {
        self.record(format!("schedule:{team}:{season_year}"));
        if let Some(make_error) = self.schedule_failure {
            return Err(make_error());
        }
        self.schedules
            .get(&(team.to_string(), season_year))
            .cloned()
            .map(|response| ScheduleView::new(team, season_year, response))
            .ok_or_else(|| AppError::schedule_not_found(team, season_year))
    }

    async fn lookup_boxscore(&self, entry: &ScheduleEntry) -> Result<BoxScore, AppError> {
        self.record(format!("boxscore:{}", entry.boxscore_id));
        self.boxscores
            .get(&entry.boxscore_id)
            .cloned()
            .ok_or_else(|| AppError::no_game_on_date(&entry.team, entry.date))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    pub const PLAYER_ID: &'static str = "jamesle01";
    pub const PLAYER_NAME: &'static str = "LeBron James";

    pub fn counting_stats(
        points: u32,
        assists: u32,
        offensive_rebounds: u32,
        defensive_rebounds: u32,
        steals: u32,
        blocks: u32,
        turnovers: u32,
    ) -> CountingStats {
        CountingStats {
            points,
            assists,
            offensive_rebounds,
            defensive_rebounds,
            steals,
            blocks,
            turnovers,
        }
    }

    pub fn player_line(name: &str, stats: CountingStats) -> BoxScorePlayer {
        BoxScorePlayer {
            name: name.to_string(),
            stats,
        }
    }

    pub fn schedule_entry(
        date: NaiveDate,
        boxscore_id: &str,
        opponent: &str,
        location: Location,
    ) -> ScheduleEntry {
        ScheduleEntry {
            team: String::new(),
            date,
            boxscore_id: boxscore_id.to_string(),
            opponent_abbreviation: opponent.to_string(),
            location,
        }
    }

    pub fn boxscore(
        boxscore_id: &str,
        date: NaiveDate,
        (away_team, away_players): (&str, Vec<BoxScorePlayer>),
        (home_team, home_players): (&str, Vec<BoxScorePlayer>),
    ) -> BoxScore {
        BoxScore {
            boxscore_id: boxscore_id.to_string(),
            date,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_players,
            away_players,
        }
    }

    /// A source covering LeBron James' 2006-07 season with Cleveland.
    ///
    /// - 2007-01-24 at DAL: 25 pts, 7 ast, 1 oreb, 9 dreb, 2 stl, 1 blk, 3 tov
    /// - 2007-01-22 vs NYK: 31 pts, LeBron listed among the home players
    /// - 2007-01-26 vs BOS: played, but LeBron is absent from the box score
    /// - 2006-11-03 at TOR: scheduled, no box score on record
    /// - season totals: 2000 points over 70 games; career: 4000 over 150
    pub fn cavaliers_2007_source() -> FakeStatsSource {
        let d = |y: i32, m: u32, day: u32| NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default();

        let mavericks = vec![Self::player_line(
            "Dirk Nowitzki",
            Self::counting_stats(31, 3, 2, 8, 1, 2, 2),
        )];
        let knicks = vec![Self::player_line(
            "Stephon Marbury",
            Self::counting_stats(18, 6, 0, 3, 1, 0, 4),
        )];
        let celtics = vec![Self::player_line(
            "Paul Pierce",
            Self::counting_stats(28, 5, 1, 6, 2, 0, 3),
        )];
        let cavaliers_without_lebron = vec![Self::player_line(
            "Zydrunas Ilgauskas",
            Self::counting_stats(14, 1, 4, 6, 0, 2, 1),
        )];

        FakeStatsSource::new()
            .with_career(PlayerProfile {
                id: Self::PLAYER_ID.to_string(),
                name: Self::PLAYER_NAME.to_string(),
                games_played: 150,
                totals: Self::counting_stats(4000, 1000, 150, 900, 250, 100, 450),
            })
            .with_season(SeasonProfile {
                season: "2006-07".to_string(),
                name: Self::PLAYER_NAME.to_string(),
                team_abbreviation: "CLE".to_string(),
                games_played: 70,
                totals: Self::counting_stats(2000, 500, 70, 420, 90, 50, 210),
            })
            .with_schedule(
                "CLE",
                2007,
                vec![
                    Self::schedule_entry(d(2006, 11, 3), "200611030TOR", "TOR", Location::Away),
                    Self::schedule_entry(d(2007, 1, 22), "200701220CLE", "NYK", Location::Home),
                    Self::schedule_entry(d(2007, 1, 24), "200701240DAL", "DAL", Location::Away),
                    Self::schedule_entry(d(2007, 1, 26), "200701260CLE", "BOS", Location::Home),
                ],
            )
            .with_boxscore(Self::boxscore(
                "200701240DAL",
                d(2007, 1, 24),
                (
                    "CLE",
                    vec![Self::player_line(
                        Self::PLAYER_NAME,
                        Self::counting_stats(25, 7, 1, 9, 2, 1, 3),
                    )],
                ),
                ("DAL", mavericks),
            ))
            .with_boxscore(Self::boxscore(
                "200701220CLE",
                d(2007, 1, 22),
                ("NYK", knicks),
                (
                    "CLE",
                    vec![Self::player_line(
                        Self::PLAYER_NAME,
                        Self::counting_stats(31, 8, 2, 5, 3, 0, 4),
                    )],
                ),
            ))
            .with_boxscore(Self::boxscore(
                "200701260CLE",
                d(2007, 1, 26),
                ("BOS", celtics),
                ("CLE", cavaliers_without_lebron),
            ))
    }
}
