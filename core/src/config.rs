use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TrackStatsError};

pub const ALTITUDE_WINDOW: usize = 5;
pub const ELEVATION_DEAD_BAND_M: f64 = 0.1;
pub const MOVING_SPEED_THRESHOLD_MS: f64 = 0.22;
pub const MIN_SPEED_FOR_DURATION_MS: f64 = 0.1;
pub const SPLIT_LENGTH_M: f64 = 1000.0;
pub const MIN_TRAILING_SPLIT_M: f64 = 1.0;
pub const FALLBACK_PACE_S_PER_M: f64 = 0.9; // ≈ 15 min/km
pub const FALLBACK_MIN_SPLIT_DURATION_S: f64 = 1.0;
pub const CHART_TARGET_POINTS: usize = 100;
pub const MAX_SPLITS: usize = 10_000;
/// Øvre grense for `max_splits` fra config.
pub const MAX_SPLITS_LIMIT: usize = 1_000_000;

/// Justerbare parametre for beregningen. Default = produksjonsverdiene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub altitude_window: usize,
    pub elevation_dead_band_m: f64,
    pub moving_speed_threshold_ms: f64,
    pub min_speed_for_duration_ms: f64,
    pub split_length_m: f64,
    pub min_trailing_split_m: f64,
    pub fallback_pace_s_per_m: f64,
    pub fallback_min_split_duration_s: f64,
    pub chart_target_points: usize,
    /// Siste split tar resten av distansen når grensen nås.
    pub max_splits: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            altitude_window: ALTITUDE_WINDOW,
            elevation_dead_band_m: ELEVATION_DEAD_BAND_M,
            moving_speed_threshold_ms: MOVING_SPEED_THRESHOLD_MS,
            min_speed_for_duration_ms: MIN_SPEED_FOR_DURATION_MS,
            split_length_m: SPLIT_LENGTH_M,
            min_trailing_split_m: MIN_TRAILING_SPLIT_M,
            fallback_pace_s_per_m: FALLBACK_PACE_S_PER_M,
            fallback_min_split_duration_s: FALLBACK_MIN_SPLIT_DURATION_S,
            chart_target_points: CHART_TARGET_POINTS,
            max_splits: MAX_SPLITS,
        }
    }
}

impl StatsConfig {
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("elevation_dead_band_m", self.elevation_dead_band_m),
            ("moving_speed_threshold_ms", self.moving_speed_threshold_ms),
            ("min_speed_for_duration_ms", self.min_speed_for_duration_ms),
            ("min_trailing_split_m", self.min_trailing_split_m),
            ("fallback_pace_s_per_m", self.fallback_pace_s_per_m),
            ("fallback_min_split_duration_s", self.fallback_min_split_duration_s),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(TrackStatsError::InvalidConfig(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !self.split_length_m.is_finite() || self.split_length_m <= 0.0 {
            return Err(TrackStatsError::InvalidConfig(format!(
                "split_length_m must be finite and > 0, got {}",
                self.split_length_m
            )));
        }
        if self.chart_target_points == 0 {
            return Err(TrackStatsError::InvalidConfig(
                "chart_target_points must be > 0".into(),
            ));
        }
        if self.max_splits == 0 || self.max_splits > MAX_SPLITS_LIMIT {
            return Err(TrackStatsError::InvalidConfig(format!(
                "max_splits must be in 1..={MAX_SPLITS_LIMIT}, got {}",
                self.max_splits
            )));
        }
        Ok(())
    }
}

/// Leser config fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-config.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StatsConfig> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(
            "fant ikke config på {}, bruker default-verdier",
            path.display()
        );
        return Ok(StatsConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let mut de = serde_json::Deserializer::from_str(&contents);
    let cfg: StatsConfig = serde_path_to_error::deserialize(&mut de)?;
    cfg.validate()?;
    info!("config lastet fra {}", path.display());
    Ok(cfg)
}

/// Lagrer config til disk som JSON (pretty-print).
pub fn save_config<P: AsRef<Path>>(cfg: &StatsConfig, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path.as_ref(), json)?;
    info!("config lagret til {}", path.as_ref().display());
    Ok(())
}
