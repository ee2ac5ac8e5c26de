//! Courtside Stats Library
//!
//! This library resolves a single basketball athlete's box-score line for a
//! calendar date, and per-game averages for a season or a whole career, from
//! an external statistics provider. The `web` module serves the results as
//! HTML pages and JSON.
//!
//! # Examples
//!
//! ```rust,no_run
//! use courtside_stats::config::Config;
//! use courtside_stats::data_fetcher::HttpStatsSource;
//! use courtside_stats::error::AppError;
//! use courtside_stats::resolver::{PlayerId, StatResolver};
//! use courtside_stats::season::parse_calendar_date;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let source = HttpStatsSource::from_config(&config)?;
//!     let resolver = StatResolver::new(PlayerId::new("jamesle01"), Arc::new(source));
//!
//!     let date = parse_calendar_date("2007-01-24")?;
//!     match resolver.game_stats(date).await? {
//!         Some(line) => println!("{} points", line.points),
//!         None => println!("No game that day"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod resolver;
pub mod season;
pub mod testing_utils;
pub mod web;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{HttpStatsSource, StatRecord, StatsSource};
pub use error::AppError;
pub use resolver::{PlayerId, StatResolver};
pub use season::Season;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
