//! Statistikk for innspilte GPS-spor: distanse, høydemeter, bevegelsestid,
//! tempo/fart, splits per km og nedsamplede grafserier.
//!
//! Kjernen ([`calculate_track_stats`]) er en ren funksjon over punktserien.
//! JSON-, CLI- og Python-lagene ligger rundt den.

pub mod accumulator;
pub mod activity;
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod models;
pub mod rewards;
pub mod smoothing;
pub mod splits;
pub mod stats;
pub mod telemetry;

#[cfg(feature = "python")]
pub mod py;

pub use activity::{ActivityGroup, ActivityType};
pub use aggregate::RoundTo;
pub use config::{load_config, save_config, StatsConfig};
pub use error::TrackStatsError;
pub use json::calculate_track_stats_json;
pub use models::{ChartSeries, Split, TrackPoint, TrackStats, TrackStatsOutput};
pub use rewards::track_xp;
pub use smoothing::{smooth_altitude, smooth_series};
pub use stats::{calculate_track_stats, calculate_track_stats_with_config};
