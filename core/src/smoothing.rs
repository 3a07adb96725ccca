use crate::models::TrackPoint;

/// Glidende gjennomsnitt over et sentrert vindu.
///
/// Vinduet klippes ved kantene (krymper, ingen padding eller wrap), så første og
/// siste verdier er snitt av færre samples. Det påvirker de første/siste
/// høydedeltaene og skal beholdes slik.
/// For vindu `w` dekker punkt `i` indeksene `[i - w/2, i + ceil(w/2))`.
/// `window <= 1` gir serien uendret.
pub fn smooth_series(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 || values.is_empty() {
        return values.to_vec();
    }

    let n = values.len();
    let back = window / 2;
    let fwd = window - back; // = ceil(window / 2)
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let start = i.saturating_sub(back);
        let end = (i + fwd).min(n);
        let slice = &values[start..end];
        let avg = slice.iter().copied().sum::<f64>() / slice.len() as f64;
        out.push(avg);
    }

    out
}

/// Rå høyder fra sporet, manglende høyde => 0.
pub fn raw_altitudes(points: &[TrackPoint]) -> Vec<f64> {
    points.iter().map(TrackPoint::altitude_or_zero).collect()
}

/// Glattet høydeserie (samme lengde som `points`).
pub fn smooth_altitude(points: &[TrackPoint], window: usize) -> Vec<f64> {
    smooth_series(&raw_altitudes(points), window)
}
