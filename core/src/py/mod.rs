use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::json::calculate_track_stats_json as calc_json;
use crate::models::TrackPoint;
use crate::rewards::track_xp;
use crate::stats::calculate_track_stats;
use crate::ActivityType;

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

/// JSON inn → JSON ut (samme kontrakt som `json::calculate_track_stats_json`).
#[pyfunction]
fn calculate_track_stats_json(py: Python<'_>, json_in: &str) -> PyResult<String> {
    // Ren beregning – slipp GIL-en mens vi regner
    py.allow_threads(|| calc_json(json_in))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Rask vei uten JSON: lister med koordinater → (distance, gain, loss, xp).
#[pyfunction]
#[pyo3(signature = (xs, ys, altitudes, activity_type = "trekking", is_public = false))]
fn track_summary(
    py: Python<'_>,
    xs: Vec<f64>,
    ys: Vec<f64>,
    altitudes: Vec<Option<f64>>,
    activity_type: &str,
    is_public: bool,
) -> PyResult<(f64, f64, f64, u32)> {
    if xs.len() != ys.len() || (!altitudes.is_empty() && altitudes.len() != xs.len()) {
        return Err(PyValueError::new_err(
            "xs, ys og altitudes må ha samme lengde",
        ));
    }

    let points: Vec<TrackPoint> = xs
        .iter()
        .zip(ys.iter())
        .enumerate()
        .map(|(i, (&x, &y))| TrackPoint {
            x,
            y,
            altitude: altitudes.get(i).copied().flatten(),
            speed: None,
        })
        .collect();

    let activity = ActivityType::from_key(activity_type);
    let out = py.allow_threads(|| calculate_track_stats(&points, 0.0, activity));
    crate::telemetry::record(points.len(), out.splits.len());

    let s = out.stats;
    Ok((s.distance, s.elevation_gain, s.elevation_loss, track_xp(&s, is_public)))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn trackstats_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_track_stats_json, m)?)?;
    m.add_function(wrap_pyfunction!(track_summary, m)?)?;
    Ok(())
}
