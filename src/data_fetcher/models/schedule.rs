use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Away,
}

/// One game on a team's season schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Team whose schedule this entry belongs to; filled in by `ScheduleView::new`.
    #[serde(skip)]
    pub team: String,
    pub date: NaiveDate,
    #[serde(rename = "boxscoreId")]
    pub boxscore_id: String,
    #[serde(rename = "opponentAbbreviation")]
    pub opponent_abbreviation: String,
    pub location: Location,
}

/// Model for the schedule API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub games: Vec<ScheduleEntry>,
}

/// A team's full-season schedule, indexable by exact date.
#[derive(Debug, Clone)]
pub struct ScheduleView {
    pub team: String,
    pub season_year: i32,
    pub games: Vec<ScheduleEntry>,
}

impl ScheduleView {
    pub fn new(team: impl Into<String>, season_year: i32, response: ScheduleResponse) -> Self {
        let team = team.into();
        let games = response
            .games
            .into_iter()
            .map(|entry| ScheduleEntry {
                team: team.clone(),
                ..entry
            })
            .collect();
        ScheduleView {
            team,
            season_year,
            games,
        }
    }

    /// Returns the team's game on `date`, or `AppError::NoGameOnDate` if the
    /// team did not play that day.
    pub fn game_on(&self, date: NaiveDate) -> Result<&ScheduleEntry, AppError> {
        self.games
            .iter()
            .find(|entry| entry.date == date)
            .ok_or_else(|| AppError::no_game_on_date(&self.team, date))
    }
}
