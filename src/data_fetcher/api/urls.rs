//! URL building utilities for provider endpoints

/// Builds the career profile URL for a player.
///
/// # Example
/// ```
/// use courtside_stats::data_fetcher::api::build_player_url;
///
/// let url = build_player_url("https://api.example.com", "jamesle01");
/// assert_eq!(url, "https://api.example.com/players/jamesle01");
/// ```
pub fn build_player_url(api_domain: &str, player_id: &str) -> String {
    format!("{}/players/{player_id}", api_domain.trim_end_matches('/'))
}

/// Builds the season-scoped profile URL for a player.
///
/// # Example
/// ```
/// use courtside_stats::data_fetcher::api::build_player_season_url;
///
/// let url = build_player_season_url("https://api.example.com", "jamesle01", "2006-07");
/// assert_eq!(url, "https://api.example.com/players/jamesle01/seasons/2006-07");
/// ```
pub fn build_player_season_url(api_domain: &str, player_id: &str, season_label: &str) -> String {
    format!(
        "{}/players/{player_id}/seasons/{season_label}",
        api_domain.trim_end_matches('/')
    )
}

/// Builds the full-season schedule URL for a team.
///
/// # Example
/// ```
/// use courtside_stats::data_fetcher::api::build_team_schedule_url;
///
/// let url = build_team_schedule_url("https://api.example.com", "CLE", 2007);
/// assert_eq!(url, "https://api.example.com/teams/CLE/schedule/2007");
/// ```
pub fn build_team_schedule_url(api_domain: &str, team: &str, season_year: i32) -> String {
    format!(
        "{}/teams/{team}/schedule/{season_year}",
        api_domain.trim_end_matches('/')
    )
}

/// Builds the box score URL for a game.
///
/// # Example
/// ```
/// use courtside_stats::data_fetcher::api::build_boxscore_url;
///
/// let url = build_boxscore_url("https://api.example.com/", "200701240DAL");
/// assert_eq!(url, "https://api.example.com/boxscores/200701240DAL");
/// ```
pub fn build_boxscore_url(api_domain: &str, boxscore_id: &str) -> String {
    format!("{}/boxscores/{boxscore_id}", api_domain.trim_end_matches('/'))
}
