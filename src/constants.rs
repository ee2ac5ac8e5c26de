//! Application-wide constants and configuration values
//!
//! Centralizes magic numbers and defaults shared by the config, fetch and web layers.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Provider id of the athlete tracked when nothing else is configured
pub const DEFAULT_PLAYER_ID: &str = "jamesle01";

/// Address the web server binds to when nothing else is configured
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// File name used for the rolling log file
pub const LOG_FILE_NAME: &str = "courtside_stats.log";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "courtside_stats";

/// Season boundaries on the NBA calendar
pub mod season {
    /// Last month that still belongs to the season ending in the same calendar year.
    /// Dates after July belong to the season that starts that autumn.
    pub const LAST_MONTH_OF_SEASON: u32 = 7;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for overriding the provider API domain
    pub const API_DOMAIN: &str = "COURTSIDE_API_DOMAIN";

    /// Environment variable for overriding the tracked player id
    pub const PLAYER_ID: &str = "COURTSIDE_PLAYER_ID";

    /// Environment variable for overriding the server bind address
    pub const BIND_ADDRESS: &str = "COURTSIDE_BIND_ADDRESS";

    /// Environment variable for overriding the log file path
    pub const LOG_FILE: &str = "COURTSIDE_LOG_FILE";

    /// Environment variable for overriding the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "COURTSIDE_HTTP_TIMEOUT";
}

/// Retry behaviour for provider requests
pub mod retry {
    /// Maximum number of retries after the first attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Initial backoff before the first retry, doubled on every attempt
    pub const BASE_DELAY_MS: u64 = 250;

    /// Upper bound on a single wait, including one requested via `Retry-After`
    pub const MAX_DELAY_MS: u64 = 5_000;
}
