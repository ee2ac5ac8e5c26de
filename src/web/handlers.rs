use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::AppState;
use super::pages;
use super::response::ApiError;
use crate::data_fetcher::models::{GameStatRecord, StatRecord};
use crate::error::AppError;
use crate::season::{Season, parse_calendar_date};

pub async fn home() -> Html<String> {
    Html(pages::home_page())
}

pub async fn about() -> Html<String> {
    Html(pages::about_page())
}

pub async fn lebron() -> Html<String> {
    Html(pages::lebron_page())
}

pub async fn lakers() -> Html<String> {
    Html(pages::lakers_page())
}

pub async fn trivia() -> Html<String> {
    Html(pages::trivia_page())
}

pub async fn stats_index() -> Html<String> {
    Html(pages::stats_index_page())
}

/// `GET /stats/{date}`
pub async fn game_stats_page(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Html<String>, AppError> {
    let date = parse_calendar_date(&date)?;
    info!("Game stats page requested for {date}");

    let record = state.resolver.game_stats(date).await?;
    Ok(Html(pages::game_stats_page(
        date,
        Season::containing(date),
        record.as_ref(),
    )))
}

#[derive(Debug, Serialize)]
pub struct GameStatsResponse {
    pub player_id: String,
    pub date: NaiveDate,
    pub season: Season,
    /// `null` when the athlete did not play that day
    pub stats: Option<GameStatRecord>,
}

/// `GET /api/stats/{date}`
pub async fn game_stats_json(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<GameStatsResponse>, ApiError> {
    let date = parse_calendar_date(&date)?;
    let stats = state.resolver.game_stats(date).await?;
    Ok(Json(GameStatsResponse {
        player_id: state.resolver.player_id().to_string(),
        date,
        season: Season::containing(date),
        stats,
    }))
}

#[derive(Debug, Serialize)]
pub struct SeasonStatsResponse {
    pub player_id: String,
    pub season: Season,
    pub stats: StatRecord,
}

/// `GET /api/seasons/{year}`, where `year` is the calendar year the season ends in
pub async fn season_stats_json(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<SeasonStatsResponse>, ApiError> {
    let season = Season::ending_in(year)?;
    let stats = state.resolver.season_stats(year).await?;
    Ok(Json(SeasonStatsResponse {
        player_id: state.resolver.player_id().to_string(),
        season,
        stats,
    }))
}

#[derive(Debug, Serialize)]
pub struct CareerStatsResponse {
    pub player_id: String,
    pub stats: StatRecord,
}

/// `GET /api/career`
pub async fn career_stats_json(
    State(state): State<AppState>,
) -> Result<Json<CareerStatsResponse>, ApiError> {
    let stats = state.resolver.career_stats().await?;
    Ok(Json(CareerStatsResponse {
        player_id: state.resolver.player_id().to_string(),
        stats,
    }))
}
