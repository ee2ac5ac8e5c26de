pub mod api;
pub mod models;
pub mod source;

pub use api::HttpStatsSource;
pub use models::{AggregateStatRecord, GameStatRecord, StatRecord};
pub use source::StatsSource;
