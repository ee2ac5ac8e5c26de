pub mod fetch_utils;
pub mod http_client;
pub mod http_source;
pub mod urls;

pub use fetch_utils::RetryPolicy;
pub use http_client::create_http_client_with_timeout;
pub use http_source::HttpStatsSource;
pub use urls::{
    build_boxscore_url, build_player_season_url, build_player_url, build_team_schedule_url,
};
