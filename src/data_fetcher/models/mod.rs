pub mod boxscore;
pub mod players;
pub mod schedule;
pub mod stats;

pub use boxscore::{BoxScore, BoxScorePlayer};
pub use players::{PlayerProfile, SeasonProfile};
pub use schedule::{Location, ScheduleEntry, ScheduleResponse, ScheduleView};
pub use stats::{AggregateStatRecord, CountingStats, GameStatRecord, StatRecord};
