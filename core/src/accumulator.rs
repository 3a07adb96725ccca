use crate::activity::ActivityType;
use crate::aggregate::{RoundTo, MS_TO_KMH};
use crate::config::StatsConfig;
use crate::models::{ChartSeries, Split, TrackPoint};
use crate::splits::{SegmentShare, SplitBuilder};

/// Løpende totaler fra ett pass over sporet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub distance: f64,       // meter
    pub elevation_gain: f64, // meter
    pub elevation_loss: f64, // meter
    pub moving_s: f64,       // sek
    pub max_speed_ms: f64,   // m/s, filtrert mot aktivitetstaket
    max_altitude: f64,
    min_altitude: f64,
    altitude_samples: usize,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            distance: 0.0,
            elevation_gain: 0.0,
            elevation_loss: 0.0,
            moving_s: 0.0,
            max_speed_ms: 0.0,
            max_altitude: f64::NEG_INFINITY,
            min_altitude: f64::INFINITY,
            altitude_samples: 0,
        }
    }
}

impl Totals {
    fn observe_altitude(&mut self, altitude: Option<f64>) {
        if let Some(a) = altitude.filter(|a| a.is_finite()) {
            if a > self.max_altitude { self.max_altitude = a; }
            if a < self.min_altitude { self.min_altitude = a; }
            self.altitude_samples += 1;
        }
    }

    /// (maks, min) over rå høyder; `None` med færre enn to høydepunkter.
    pub fn altitude_range(&self) -> Option<(f64, f64)> {
        if self.altitude_samples >= 2 {
            Some((self.max_altitude, self.min_altitude))
        } else {
            None
        }
    }
}

/// Alt akkumulatoren produserer.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatorOutput {
    pub totals: Totals,
    pub splits: Vec<Split>,
    pub elevation_chart: ChartSeries,
    pub speed_chart: ChartSeries,
}

/// Går gjennom punktparene `(p[i-1], p[i])` i ett lineært pass: distanse,
/// høydemeter, bevegelsestid, makshastighet, splits og graf-sampling.
#[derive(Debug, Clone)]
pub struct SegmentAccumulator<'a> {
    smoothed: &'a [f64],
    dead_band_m: f64,
    moving_threshold_ms: f64,
    min_speed_for_duration_ms: f64,
    speed_ceiling_ms: f64,
    chart_step: usize,
    last_index: usize,

    totals: Totals,
    splits: SplitBuilder,
    elevation_chart: ChartSeries,
    speed_chart: ChartSeries,
}

/// Hver `step`-te punkt går til grafene, med `step = max(1, n / target)`.
pub fn chart_step(n_points: usize, target_points: usize) -> usize {
    (n_points / target_points.max(1)).max(1)
}

impl<'a> SegmentAccumulator<'a> {
    /// `smoothed` må ha samme lengde som punktserien som mates inn.
    pub fn new(
        smoothed: &'a [f64],
        activity: ActivityType,
        has_external_duration: bool,
        cfg: &StatsConfig,
    ) -> Self {
        let n = smoothed.len();
        let step = chart_step(n, cfg.chart_target_points);
        let cap = n.saturating_sub(1) / step + 2;
        Self {
            smoothed,
            dead_band_m: cfg.elevation_dead_band_m,
            moving_threshold_ms: cfg.moving_speed_threshold_ms,
            min_speed_for_duration_ms: cfg.min_speed_for_duration_ms,
            speed_ceiling_ms: activity.max_speed_ms(),
            chart_step: step,
            last_index: n.saturating_sub(1),
            totals: Totals::default(),
            splits: SplitBuilder::new(cfg, has_external_duration),
            elevation_chart: ChartSeries::with_capacity(cap),
            speed_chart: ChartSeries::with_capacity(cap),
        }
    }

    /// Første punkt bidrar bare til høydeekstremene.
    pub fn start(&mut self, first: &TrackPoint) {
        self.totals.observe_altitude(first.altitude);
    }

    pub fn step(&mut self, i: usize, prev: &TrackPoint, cur: &TrackPoint) {
        // distanse
        let seg_distance = prev.distance_to(cur);
        self.totals.distance += seg_distance;

        // fart og bevegelsestid: farten målt i punkt i, ikke interpolert
        let speed = cur.speed_or_zero();
        let seg_duration_s = if speed > self.min_speed_for_duration_ms {
            seg_distance / speed
        } else {
            0.0
        };
        let moving_s = if speed > self.moving_threshold_ms { seg_duration_s } else { 0.0 };
        self.totals.moving_s += moving_s;

        // GPS-spikes over aktivitetstaket ignoreres
        if speed > self.totals.max_speed_ms && speed < self.speed_ceiling_ms {
            self.totals.max_speed_ms = speed;
        }

        self.totals.observe_altitude(cur.altitude);

        // høydemeter fra glattet serie, med dødbånd
        let delta = self.smoothed[i] - self.smoothed[i - 1];
        let mut seg_gain = 0.0;
        if delta > self.dead_band_m {
            seg_gain = delta;
            self.totals.elevation_gain += delta;
        } else if delta < -self.dead_band_m {
            self.totals.elevation_loss += -delta;
        }

        self.splits.push_segment(SegmentShare {
            distance: seg_distance,
            elevation_gain: seg_gain,
            moving_s,
        });

        if i % self.chart_step == 0 || i == self.last_index {
            let label = (self.totals.distance / 1000.0).round_to(1);
            self.elevation_chart.push(label, self.smoothed[i].round_to(1), i);
            self.speed_chart.push(label, (speed * MS_TO_KMH).round_to(1), i);
        }
    }

    pub fn finish(self) -> AccumulatorOutput {
        AccumulatorOutput {
            totals: self.totals,
            splits: self.splits.finish(),
            elevation_chart: self.elevation_chart,
            speed_chart: self.speed_chart,
        }
    }
}

/// Kjører hele passet over `points` med ferdig glattede høyder.
pub fn accumulate(
    points: &[TrackPoint],
    smoothed: &[f64],
    activity: ActivityType,
    has_external_duration: bool,
    cfg: &StatsConfig,
) -> AccumulatorOutput {
    debug_assert_eq!(points.len(), smoothed.len());
    let mut acc = SegmentAccumulator::new(smoothed, activity, has_external_duration, cfg);
    if let Some(first) = points.first() {
        acc.start(first);
    }
    for (i, pair) in points.windows(2).enumerate() {
        acc.step(i + 1, &pair[0], &pair[1]);
    }
    acc.finish()
}
