use std::fmt::Write as _;

use crate::aggregate::RoundTo;
use crate::models::TrackStatsOutput;

/// mm:ss (eller t:mm:ss) fra millisekunder.
pub fn format_duration_ms(ms: f64) -> String {
    let total = if ms.is_finite() && ms > 0.0 { (ms / 1000.0).round() as u64 } else { 0 };
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Tempo i min/km som m:ss.
pub fn format_pace(min_per_km: f64) -> String {
    format_duration_ms(min_per_km * 60_000.0)
}

/// Tekstrapport for terminal.
pub fn format_report(out: &TrackStatsOutput) -> String {
    let s = &out.stats;
    let mut r = String::new();

    // write! mot String feiler ikke
    let _ = writeln!(r, "--- Track Report ---");
    let _ = writeln!(r, "Distanse:        {:.2} km", s.distance / 1000.0);
    let _ = writeln!(r, "Høydemeter:      +{:.0} m / -{:.0} m", s.elevation_gain, s.elevation_loss);
    let _ = writeln!(r, "Høyde min/maks:  {:.0} / {:.0} m", s.min_altitude, s.max_altitude);
    let _ = writeln!(r, "Total tid:       {}", format_duration_ms(s.duration));
    let _ = writeln!(r, "Bevegelsestid:   {}", format_duration_ms(s.moving_time));
    let _ = writeln!(r, "Snittfart:       {:.1} km/t (i bevegelse {:.1})", s.avg_speed, s.avg_moving_speed);
    let _ = writeln!(r, "Snittempo:       {} /km (i bevegelse {})", format_pace(s.avg_pace), format_pace(s.avg_moving_pace));
    let _ = writeln!(r, "Makshastighet:   {:.1} km/t", s.max_speed);
    let _ = writeln!(r, "VAM:             {:.0} m/t", s.vam);

    if !out.splits.is_empty() {
        let _ = writeln!(r, "Splits:");
        for sp in &out.splits {
            let _ = writeln!(
                r,
                "  #{:<3} {:>7.0} m  {:>8}  +{} m",
                sp.number,
                sp.distance,
                format_duration_ms(sp.duration),
                sp.elevation_gain.round_to(1)
            );
        }
    }
    r
}
