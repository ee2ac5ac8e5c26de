use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use courtside_stats::error::AppError;
use courtside_stats::season::Season;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Basketball statistics for a single athlete, served over HTTP.
///
/// By default starts the web server. With --date, --season or --career the
/// requested statistics are printed once and the program exits.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the tracked player's box-score line for a date (YYYY-MM-DD) and exit.
    #[arg(long = "date", short = 'd', help_heading = "Queries")]
    pub date: Option<String>,

    /// Print per-game averages for a season and exit. Accepts the ending year
    /// (2016) or a season label (2015-16).
    #[arg(long = "season", short = 's', help_heading = "Queries", conflicts_with = "date")]
    pub season: Option<String>,

    /// Print career per-game averages and exit.
    #[arg(long = "career", help_heading = "Queries", conflicts_with_all = ["date", "season"])]
    pub career: bool,

    /// Address to serve on, overriding the configured bind address.
    #[arg(long = "bind", short = 'b', help_heading = "Server")]
    pub bind: Option<String>,

    /// Provider id of the player to track, overriding the configured player.
    #[arg(long = "player", short = 'p', help_heading = "Server")]
    pub player: Option<String>,

    /// Update API domain in config. Will prompt for new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also log to stdout in query mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the
    /// default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// A one-shot query was requested instead of the server.
    pub fn is_query_mode(&self) -> bool {
        self.date.is_some() || self.season.is_some() || self.career
    }

    /// A configuration command was requested.
    pub fn is_config_mode(&self) -> bool {
        self.new_api_domain.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
            || self.list_config
    }
}

/// Parses a `--season` value into the calendar year the season ends in.
pub fn parse_season_year(value: &str) -> Result<i32, AppError> {
    if let Ok(year) = value.trim().parse::<i32>() {
        return Season::ending_in(year).map(|season| season.year());
    }
    value.parse::<Season>().map(|season| season.year())
}
