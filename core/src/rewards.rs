use crate::models::TrackStats;

pub const XP_PER_KM: f64 = 10.0;
pub const XP_PER_100M_ELEVATION: f64 = 20.0;
pub const XP_BONUS_SHARE: u32 = 50;
pub const XP_FOR_SAVING_TRACK: u32 = 25;

/// XP for et lagret spor: fast bonus for lagring, distanse, høydemeter og
/// deling. Negative/ikke-finite verdier gir ingen XP for den delen.
pub fn track_xp(stats: &TrackStats, is_public: bool) -> u32 {
    let mut xp = XP_FOR_SAVING_TRACK;
    xp += scaled_xp(stats.distance / 1000.0, XP_PER_KM);
    xp += scaled_xp(stats.elevation_gain / 100.0, XP_PER_100M_ELEVATION);
    if is_public {
        xp += XP_BONUS_SHARE;
    }
    xp
}

fn scaled_xp(units: f64, per_unit: f64) -> u32 {
    let v = (units * per_unit).round();
    if v.is_finite() && v > 0.0 { v.min(u32::MAX as f64) as u32 } else { 0 }
}
