use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::activity::ActivityType;
use crate::config::StatsConfig;
use crate::error::{Result, TrackStatsError};
use crate::models::{TrackPoint, TrackStatsOutput};
use crate::stats::calculate_track_stats_with_config;
use crate::telemetry;

// ──────────────────────────────────────────────────────────────────────────────
// INPUT-REPR (untagged): koordinat-array eller objekt med aliaser
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Clone)]
struct PointObjTol {
    #[serde(alias = "lon", alias = "easting")]
    x: f64,
    #[serde(alias = "lat", alias = "northing")]
    y: f64,
    #[serde(default, alias = "alt", alias = "elevation", alias = "ele")]
    altitude: Option<f64>,
    #[serde(default, alias = "v", alias = "v_ms")]
    speed: Option<f64>,
}

// [x, y, alt?, speed?] som fra den projiserte parseren; null tillatt for alt/speed
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointInTol {
    Coords(Vec<Option<f64>>),
    Object(PointObjTol),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStatsRequest {
    points: Vec<PointInTol>,
    #[serde(default, alias = "duration", alias = "precalculated_duration")]
    precalculated_duration: f64,
    #[serde(default, alias = "activity", alias = "activity_type")]
    activity_type: ActivityType,
    #[serde(default)]
    config: Option<StatsConfig>,
}

fn to_core_point(index: usize, p: PointInTol) -> Result<TrackPoint> {
    let point = match p {
        PointInTol::Coords(c) => {
            if c.len() < 2 {
                return Err(TrackStatsError::InvalidPoint {
                    index,
                    reason: format!("expected at least 2 coordinates, got {}", c.len()),
                });
            }
            let (Some(x), Some(y)) = (c[0], c[1]) else {
                return Err(TrackStatsError::InvalidPoint {
                    index,
                    reason: "x/y must be numbers".into(),
                });
            };
            TrackPoint {
                x,
                y,
                altitude: c.get(2).copied().flatten(),
                speed: c.get(3).copied().flatten(),
            }
        }
        PointInTol::Object(o) => TrackPoint {
            x: o.x,
            y: o.y,
            altitude: o.altitude,
            speed: o.speed,
        },
    };

    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(TrackStatsError::InvalidPoint {
            index,
            reason: "non-finite coordinate".into(),
        });
    }
    Ok(point)
}

impl TrackStatsRequest {
    pub fn parse(json_in: &str) -> Result<Self> {
        let mut de = json::Deserializer::from_str(json_in);
        let req: TrackStatsRequest = spte::deserialize(&mut de)?;
        Ok(req)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn set_activity(&mut self, activity: ActivityType) {
        self.activity_type = activity;
    }

    pub fn set_precalculated_duration_ms(&mut self, ms: f64) {
        self.precalculated_duration = ms;
    }

    /// Config fra fil vinner ikke over config i selve forespørselen.
    pub fn set_default_config(&mut self, cfg: StatsConfig) {
        if self.config.is_none() {
            self.config = Some(cfg);
        }
    }

    /// Validerer punktene og konverterer til kjernetyper.
    pub fn into_parts(self) -> Result<(Vec<TrackPoint>, f64, ActivityType, StatsConfig)> {
        let cfg = self.config.unwrap_or_default();
        cfg.validate()?;
        let points = self
            .points
            .into_iter()
            .enumerate()
            .map(|(i, p)| to_core_point(i, p))
            .collect::<Result<Vec<_>>>()?;
        Ok((points, self.precalculated_duration, self.activity_type, cfg))
    }
}

/// Kjører beregningen og oppdaterer telemetri-tellerne.
pub fn run_request(req: TrackStatsRequest) -> Result<TrackStatsOutput> {
    let (points, duration_ms, activity, cfg) = req.into_parts()?;
    let out = calculate_track_stats_with_config(&points, duration_ms, activity, &cfg);
    telemetry::record(points.len(), out.splits.len());
    Ok(out)
}

/// JSON inn → JSON ut:
/// `{ points, precalculatedDuration?, activityType?, config? }` →
/// `{ stats, elevationChartData, speedChartData, splits }`.
pub fn calculate_track_stats_json(json_in: &str) -> Result<String> {
    let req = TrackStatsRequest::parse(json_in)?;
    let out = run_request(req)?;
    Ok(json::to_string(&out)?)
}
