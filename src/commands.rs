use crate::cli::{Args, parse_season_year};
use courtside_stats::config::Config;
use courtside_stats::config::user_prompts::prompt_for_api_domain;
use courtside_stats::data_fetcher::{HttpStatsSource, StatRecord};
use courtside_stats::error::AppError;
use courtside_stats::resolver::{PlayerId, StatResolver};
use courtside_stats::season::{Season, parse_calendar_date};
use courtside_stats::web::{self, AppState};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Validates command line argument combinations clap cannot express.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.is_config_mode() && args.is_query_mode() {
        return Err(AppError::config_error(
            "Configuration commands cannot be combined with --date, --season or --career",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use --set-log-file and --clear-log-file together",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the existing config file when there is one. An empty
/// `--config` value prompts for the domain.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = load_existing_or_default(&config_path).await?;

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.trim().is_empty() {
            prompt_for_api_domain().await?
        } else {
            new_domain.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(&config_path).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Loads the config file at `path`, or defaults when there is none.
/// A file that exists but does not parse is an error, so it is never
/// overwritten with defaults.
async fn load_existing_or_default(path: &str) -> Result<Config, AppError> {
    if Path::new(path).exists() {
        Config::load_from_path(path).await
    } else {
        Ok(Config::default())
    }
}

/// Command line overrides win over both the config file and the environment.
pub fn apply_arg_overrides(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(bind) = &args.bind {
        config.bind_address = bind.clone();
    }
    if let Some(player) = &args.player {
        config.player_id = player.clone();
    }
    config.validate()
}

pub fn build_resolver(config: &Config) -> Result<StatResolver, AppError> {
    let source = HttpStatsSource::from_config(config)?;
    Ok(StatResolver::new(
        PlayerId::new(config.player_id.clone()),
        Arc::new(source),
    ))
}

/// Runs the web server until it is stopped.
pub async fn handle_serve_command(config: &Config) -> Result<(), AppError> {
    let resolver = build_resolver(config)?;
    web::serve(AppState::new(resolver), &config.bind_address).await
}

/// Handles --date, --season and --career: resolves once and prints the result.
pub async fn handle_query_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let resolver = build_resolver(config)?;

    if let Some(date) = &args.date {
        let date = parse_calendar_date(date)?;
        let season = Season::containing(date);
        info!("Querying game stats for {date}");

        match resolver.game_stats(date).await? {
            Some(record) => {
                println!(
                    "{} on {} (season {season})",
                    resolver.player_id(),
                    date.format("%m/%d/%Y")
                );
                print_rows(&record.rows());
            }
            None => println!("No game on {} (season {season})", date.format("%m/%d/%Y")),
        }
    } else if let Some(season) = &args.season {
        let season = Season::ending_in(parse_season_year(season)?)?;
        let record = resolver.season_stats(season.year()).await?;
        println!("{} in season {season}", resolver.player_id());
        print_record(&record);
    } else if args.career {
        let record = resolver.career_stats().await?;
        println!("{} career", resolver.player_id());
        print_record(&record);
    }

    Ok(())
}

fn print_record(record: &StatRecord) {
    print_rows(&record.rows());
}

fn print_rows(rows: &[(&'static str, String)]) {
    for (label, value) in rows {
        println!("  {label:<20}{value:>8}");
    }
}
