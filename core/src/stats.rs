use log::debug;

use crate::accumulator::accumulate;
use crate::activity::ActivityType;
use crate::aggregate::{aggregate, sanitize_duration_ms};
use crate::config::StatsConfig;
use crate::models::{TrackPoint, TrackStatsOutput};
use crate::smoothing::smooth_altitude;

/// Statistikk, grafer og splits for et spor, med standard-parametre.
///
/// `precalculated_duration_ms` er total tid i ms fra kaller, `0` hvis ukjent
/// (da estimeres split-tider for spor uten fart).
pub fn calculate_track_stats(
    points: &[TrackPoint],
    precalculated_duration_ms: f64,
    activity: ActivityType,
) -> TrackStatsOutput {
    calculate_track_stats_with_config(
        points,
        precalculated_duration_ms,
        activity,
        &StatsConfig::default(),
    )
}

/// Som [`calculate_track_stats`], men med egne parametre.
///
/// Ren funksjon: ingen global tilstand og ingen I/O, trygg å kalle parallelt.
pub fn calculate_track_stats_with_config(
    points: &[TrackPoint],
    precalculated_duration_ms: f64,
    activity: ActivityType,
    cfg: &StatsConfig,
) -> TrackStatsOutput {
    // < 2 punkter: alt null, tomme grafer, ingen splits
    if points.len() < 2 {
        debug!("trackstats: {} punkt(er), returnerer tomt resultat", points.len());
        return TrackStatsOutput::default();
    }

    let duration_ms = sanitize_duration_ms(precalculated_duration_ms);

    // 1️⃣ Glatt høyde én gang for hele serien
    let smoothed = smooth_altitude(points, cfg.altitude_window);

    // 2️⃣ Ett lineært pass: distanse, høydemeter, tid, splits og grafer
    let acc = accumulate(points, &smoothed, activity, duration_ms > 0.0, cfg);

    // 3️⃣ Tempo/fart/VAM fra totalene
    let stats = aggregate(&acc.totals, duration_ms);

    debug!(
        "trackstats: n={} activity={} distance={:.1} m gain={:.1} m splits={} chart={}",
        points.len(),
        activity,
        stats.distance,
        stats.elevation_gain,
        acc.splits.len(),
        acc.elevation_chart.len()
    );

    TrackStatsOutput {
        stats,
        elevation_chart: acc.elevation_chart,
        speed_chart: acc.speed_chart,
        splits: acc.splits,
    }
}
