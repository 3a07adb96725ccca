// core/tests/test_track_stats.rs
use trackstats_core::{
    calculate_track_stats, ActivityType, TrackPoint, TrackStats, TrackStatsOutput,
};

fn p(x: f64, y: f64, alt: f64, speed: f64) -> TrackPoint {
    TrackPoint { x, y, altitude: Some(alt), speed: Some(speed) }
}

/// Deterministisk "tilfeldig" spor (LCG) – ingen rand-avhengighet.
fn make_wiggly_track(n: usize, seed: u64) -> Vec<TrackPoint> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / ((1u64 << 31) as f64)
    };
    let (mut x, mut y, mut alt) = (0.0, 0.0, 500.0);
    (0..n)
        .map(|_| {
            x += 5.0 + 20.0 * next();
            y += 10.0 * (next() - 0.5);
            alt += (8.0 * (next() - 0.5)).round();
            TrackPoint { x, y, altitude: Some(alt), speed: Some(3.0 * next()) }
        })
        .collect()
}

fn assert_all_zero(out: &TrackStatsOutput) {
    assert_eq!(out.stats, TrackStats::default());
    assert!(out.elevation_chart.is_empty());
    assert!(out.speed_chart.is_empty());
    assert!(out.splits.is_empty());
}

#[test]
fn fewer_than_two_points_gives_all_zero_result() {
    assert_all_zero(&calculate_track_stats(&[], 0.0, ActivityType::Trekking));
    assert_all_zero(&calculate_track_stats(
        &[p(10.0, 10.0, 500.0, 3.0)],
        3_600_000.0,
        ActivityType::Bike,
    ));
}

#[test]
fn three_colinear_points_scenario() {
    let points = vec![
        p(0.0, 0.0, 100.0, 0.0),
        p(500.0, 0.0, 105.0, 2.0),
        p(1100.0, 0.0, 95.0, 2.0),
    ];
    let out = calculate_track_stats(&points, 0.0, ActivityType::Trekking);
    let s = out.stats;

    assert!((s.distance - 1100.0).abs() < 1e-9, "distance {}", s.distance);

    // vindu 5 over 3 punkter => alle glattede høyder er 100 => ingen høydemeter
    assert_eq!(s.elevation_gain, 0.0);
    assert_eq!(s.elevation_loss, 0.0);
    assert_eq!(s.max_altitude, 105.0);
    assert_eq!(s.min_altitude, 95.0);

    // 500 m + 600 m @ 2 m/s
    assert!((s.moving_time - 550_000.0).abs() < 1e-6);
    assert!((s.max_speed - 7.2).abs() < 1e-9);
    assert!((s.avg_moving_speed - 7.2).abs() < 1e-9);
    assert_eq!(s.avg_speed, 0.0);
    assert_eq!(s.avg_pace, 0.0);
    assert_eq!(s.vam, 0.0);

    assert_eq!(out.splits.len(), 2);
    assert_eq!(out.splits[0].number, 1);
    assert!((out.splits[0].distance - 1000.0).abs() < 1e-9);
    assert!((out.splits[0].duration - 500_000.0).abs() < 1e-6);
    assert_eq!(out.splits[1].number, 2);
    assert!((out.splits[1].distance - 100.0).abs() < 1e-9);
    assert!((out.splits[1].duration - 50_000.0).abs() < 1e-6);

    assert_eq!(out.elevation_chart.labels, vec![0.5, 1.1]);
    assert_eq!(out.elevation_chart.data, vec![100.0, 100.0]);
    assert_eq!(out.speed_chart.data, vec![7.2, 7.2]);
    assert_eq!(out.speed_chart.point_indices, vec![1, 2]);
}

#[test]
fn identical_altitude_gives_no_gain_or_loss() {
    let points: Vec<TrackPoint> = (0..50).map(|i| p(i as f64 * 30.0, 0.0, 1234.5, 1.2)).collect();
    let s = calculate_track_stats(&points, 0.0, ActivityType::Walking).stats;
    assert_eq!(s.elevation_gain, 0.0);
    assert_eq!(s.elevation_loss, 0.0);
    assert_eq!(s.max_altitude, 1234.5);
    assert_eq!(s.min_altitude, 1234.5);
}

#[test]
fn altitude_extremes_need_two_altitude_samples() {
    let points = vec![
        TrackPoint::new(0.0, 0.0).with_altitude(50.0),
        TrackPoint::new(10.0, 0.0),
    ];
    let s = calculate_track_stats(&points, 0.0, ActivityType::Trekking).stats;
    assert_eq!((s.max_altitude, s.min_altitude), (0.0, 0.0));

    let points = vec![
        TrackPoint::new(0.0, 0.0),
        TrackPoint::new(10.0, 0.0).with_altitude(50.0),
        TrackPoint::new(20.0, 0.0),
        TrackPoint::new(30.0, 0.0).with_altitude(47.5),
    ];
    let s = calculate_track_stats(&points, 0.0, ActivityType::Trekking).stats;
    assert_eq!((s.max_altitude, s.min_altitude), (50.0, 47.5));
}

#[test]
fn one_hour_ten_km_gives_10_kmh_and_6_min_per_km() {
    let points = vec![TrackPoint::new(0.0, 0.0), TrackPoint::new(10_000.0, 0.0)];
    let out = calculate_track_stats(&points, 3_600_000.0, ActivityType::Running);
    let s = out.stats;
    assert!((s.avg_speed - 10.0).abs() < 1e-9, "avg_speed {}", s.avg_speed);
    assert!((s.avg_pace - 6.0).abs() < 1e-9, "avg_pace {}", s.avg_pace);
    assert_eq!(s.duration, 3_600_000.0);
    // uten fart ingen bevegelsestid
    assert_eq!(s.moving_time, 0.0);
    assert_eq!(s.avg_moving_speed, 0.0);
    assert_eq!(s.avg_moving_pace, 0.0);
    assert_eq!(out.splits.len(), 10);
}

#[test]
fn vam_uses_total_duration() {
    // jevn stigning 1 m per 10 m, 2000 m => 200 m høydemeter (minus kantene av glattingen)
    let points: Vec<TrackPoint> = (0..=200).map(|i| p(i as f64 * 10.0, 0.0, i as f64, 1.0)).collect();
    let s = calculate_track_stats(&points, 1_800_000.0, ActivityType::Mountaineering).stats;
    assert!(s.elevation_gain > 190.0 && s.elevation_gain <= 200.0, "gain {}", s.elevation_gain);
    assert!((s.vam - s.elevation_gain * 2.0).abs() < 1e-9);
}

#[test]
fn reversing_track_swaps_gain_and_loss() {
    let alts = [100.0, 102.0, 110.0, 108.0, 120.0, 125.0, 115.0, 105.0, 100.0, 130.0, 128.0, 90.0];
    let fwd: Vec<TrackPoint> = alts.iter().enumerate().map(|(i, a)| p(i as f64 * 50.0, 0.0, *a, 1.0)).collect();
    let mut rev = fwd.clone();
    rev.reverse();

    let a = calculate_track_stats(&fwd, 0.0, ActivityType::Trekking).stats;
    let b = calculate_track_stats(&rev, 0.0, ActivityType::Trekking).stats;
    assert!(a.elevation_gain > 0.0 && a.elevation_loss > 0.0);
    assert!((a.elevation_gain - b.elevation_loss).abs() < 1e-9);
    assert!((a.elevation_loss - b.elevation_gain).abs() < 1e-9);
}

#[test]
fn gain_and_loss_are_never_negative() {
    for seed in 1..6 {
        let s = calculate_track_stats(&make_wiggly_track(400, seed), 0.0, ActivityType::Other).stats;
        assert!(s.elevation_gain >= 0.0 && s.elevation_loss >= 0.0);
        assert!(s.distance >= 0.0 && s.moving_time >= 0.0);
        assert!(s.max_altitude >= s.min_altitude);
    }
}

#[test]
fn max_speed_never_exceeds_activity_ceiling() {
    for activity in ActivityType::ALL {
        let ceiling_kmh = activity.max_speed_ms() * 3.6;
        let points: Vec<TrackPoint> = (0..40)
            .map(|i| p(i as f64 * 25.0, 0.0, 0.0, if i % 7 == 3 { 45.0 } else { 2.0 + i as f64 * 0.1 }))
            .collect();
        let s = calculate_track_stats(&points, 0.0, activity).stats;
        assert!(s.max_speed < ceiling_kmh, "{activity}: {} >= {}", s.max_speed, ceiling_kmh);
        assert!(s.max_speed > 0.0);
    }
}

#[test]
fn split_distances_sum_to_total_distance() {
    for (n, seed) in [(2, 7), (30, 11), (500, 3), (2_345, 99)] {
        let out = calculate_track_stats(&make_wiggly_track(n, seed), 0.0, ActivityType::Running);
        let total: f64 = out.splits.iter().map(|s| s.distance).sum();
        let d = out.stats.distance;
        assert!(
            (total - d).abs() <= 1e-6 * d.max(1.0),
            "n={n}: sum splits {total} vs distance {d}"
        );
        for (i, sp) in out.splits.iter().enumerate() {
            assert_eq!(sp.number as usize, i + 1);
            assert!(sp.distance <= 1000.0 + 1.0 + 1e-9);
        }
    }
}

#[test]
fn split_gain_sums_to_total_gain() {
    let out = calculate_track_stats(&make_wiggly_track(800, 5), 0.0, ActivityType::Trekking);
    let total: f64 = out.splits.iter().map(|s| s.elevation_gain).sum();
    assert!((total - out.stats.elevation_gain).abs() < 1e-6);
}

#[test]
fn parallel_invocations_match_sequential() {
    let tracks: Vec<Vec<TrackPoint>> = (0..8).map(|s| make_wiggly_track(300, s + 1)).collect();
    let sequential: Vec<TrackStatsOutput> = tracks
        .iter()
        .map(|t| calculate_track_stats(t, 0.0, ActivityType::Mtb))
        .collect();

    let parallel: Vec<TrackStatsOutput> = std::thread::scope(|scope| {
        let handles: Vec<_> = tracks
            .iter()
            .map(|t| scope.spawn(move || calculate_track_stats(t, 0.0, ActivityType::Mtb)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
