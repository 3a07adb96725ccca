use crate::accumulator::Totals;
use crate::models::TrackStats;

/// m/s → km/t
pub const MS_TO_KMH: f64 = 3.6;

// --- RoundTo trait (offentlig, brukt av graf-samplingen og rapporten) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// km/t fra distanse og tid; 0 når tiden mangler.
#[inline]
fn speed_kmh(distance_km: f64, seconds: f64) -> f64 {
    if seconds > 0.0 { distance_km / (seconds / 3600.0) } else { 0.0 }
}

/// min/km fra distanse og tid; 0 når en av dem mangler.
#[inline]
fn pace_min_per_km(distance_km: f64, seconds: f64) -> f64 {
    if distance_km > 0.0 && seconds > 0.0 { (seconds / 60.0) / distance_km } else { 0.0 }
}

/// Sluttberegning: tempo, fart og VAM fra akkumulerte totaler.
///
/// `precalculated_duration_ms` er total veggklokketid fra kaller (0 = ukjent)
/// og er uavhengig av bevegelsestiden akkumulatoren har regnet ut.
pub fn aggregate(totals: &Totals, precalculated_duration_ms: f64) -> TrackStats {
    let duration_ms = sanitize_duration_ms(precalculated_duration_ms);
    let distance_km = totals.distance / 1000.0;
    let total_s = duration_ms / 1000.0;
    let moving_s = totals.moving_s;
    let hours = total_s / 3600.0;

    let (max_altitude, min_altitude) = totals.altitude_range().unwrap_or((0.0, 0.0));

    TrackStats {
        distance: totals.distance,
        max_altitude,
        min_altitude,
        elevation_gain: totals.elevation_gain,
        elevation_loss: totals.elevation_loss,
        duration: duration_ms,
        moving_time: moving_s * 1000.0,
        avg_pace: pace_min_per_km(distance_km, total_s),
        avg_moving_pace: pace_min_per_km(distance_km, moving_s),
        max_speed: totals.max_speed_ms * MS_TO_KMH,
        avg_speed: speed_kmh(distance_km, total_s),
        avg_moving_speed: speed_kmh(distance_km, moving_s),
        vam: if hours > 0.0 { totals.elevation_gain / hours } else { 0.0 },
    }
}

/// Negativ eller ikke-finit varighet behandles som ukjent (0).
#[inline]
pub(crate) fn sanitize_duration_ms(ms: f64) -> f64 {
    if ms.is_finite() && ms > 0.0 { ms } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_one_decimal() {
        assert_eq!(1.26_f64.round_to(1), 1.3);
        assert_eq!(0.04_f64.round_to(1), 0.0);
        assert_eq!(2.5_f64.round_to(0), 3.0);
    }

    #[test]
    fn zero_time_gives_zero_not_nan() {
        assert_eq!(speed_kmh(10.0, 0.0), 0.0);
        assert_eq!(pace_min_per_km(0.0, 600.0), 0.0);
        assert_eq!(pace_min_per_km(5.0, 0.0), 0.0);
    }

    #[test]
    fn duration_sanitizing() {
        assert_eq!(sanitize_duration_ms(-5.0), 0.0);
        assert_eq!(sanitize_duration_ms(f64::NAN), 0.0);
        assert_eq!(sanitize_duration_ms(1500.0), 1500.0);
    }
}
