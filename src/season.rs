//! NBA season resolution
//!
//! Seasons span two calendar years, starting in autumn. A season is identified
//! by its label (e.g. `2023-24`) and by its resolution year, the calendar year
//! in which it ends, which is what schedule lookups are keyed by.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::constants::season::LAST_MONTH_OF_SEASON;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season {
    start_year: i32,
}

impl Season {
    /// Returns the season containing `date`.
    ///
    /// Dates after July belong to the season starting that year; dates in
    /// January through July belong to the season that started the year before.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use courtside_stats::season::Season;
    ///
    /// let date = NaiveDate::from_ymd_opt(2007, 1, 24).unwrap();
    /// let season = Season::containing(date);
    /// assert_eq!(season.label(), "2006-07");
    /// assert_eq!(season.year(), 2007);
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() > LAST_MONTH_OF_SEASON {
            date.year()
        } else {
            date.year() - 1
        };
        let season = Season { start_year };
        debug!(
            "Resolved date {} to season {} (year {})",
            date,
            season,
            season.year()
        );
        season
    }

    /// Returns the season that ends in calendar year `year`.
    ///
    /// Years whose season would start outside the range of `NaiveDate` are
    /// rejected as `AppError::InvalidSeason`.
    ///
    /// ```
    /// use courtside_stats::season::Season;
    ///
    /// assert_eq!(Season::ending_in(2016).unwrap().label(), "2015-16");
    /// assert!(Season::ending_in(i32::MIN).is_err());
    /// ```
    pub fn ending_in(year: i32) -> Result<Self, AppError> {
        let supported = (NaiveDate::MIN.year() + 1)..=NaiveDate::MAX.year();
        if !supported.contains(&year) {
            return Err(AppError::invalid_season(year.to_string()));
        }
        Ok(Season {
            start_year: year - 1,
        })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Resolution year: the calendar year the season ends in.
    pub fn year(&self) -> i32 {
        self.start_year + 1
    }

    /// Label in the provider's `YYYY-YY` form.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.start_year, self.year().rem_euclid(100))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl FromStr for Season {
    type Err = AppError;

    /// Parses a `YYYY-YY` label. The two-digit suffix must follow the start year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::invalid_season(s);

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        let start_year = start.parse::<i32>().map_err(|_| invalid())?;
        let end_suffix = end.parse::<i32>().map_err(|_| invalid())?;

        let season = Season { start_year };
        if season.year().rem_euclid(100) != end_suffix {
            return Err(invalid());
        }
        Ok(season)
    }
}

/// Parses a hyphen-delimited `YYYY-MM-DD` string as three integers.
///
/// Anything that is not three integers forming a real calendar date is
/// rejected as `AppError::InvalidDate`.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, AppError> {
    let invalid = || AppError::invalid_date(input);

    let mut parts = input.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    let day = day.parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
