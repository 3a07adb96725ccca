use crate::config::StatsConfig;
use crate::models::Split;

/// Ett segments bidrag til splittene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentShare {
    pub distance: f64,       // meter
    pub elevation_gain: f64, // meter (allerede etter dødbånd)
    pub moving_s: f64,       // bevegelsestid i sekunder
}

impl SegmentShare {
    fn scaled(self, f: f64) -> Self {
        Self {
            distance: self.distance * f,
            elevation_gain: self.elevation_gain * f,
            moving_s: self.moving_s * f,
        }
    }

    fn minus(self, other: Self) -> Self {
        Self {
            distance: self.distance - other.distance,
            elevation_gain: self.elevation_gain - other.elevation_gain,
            moving_s: self.moving_s - other.moving_s,
        }
    }

    fn add(&mut self, other: Self) {
        self.distance += other.distance;
        self.elevation_gain += other.elevation_gain;
        self.moving_s += other.moving_s;
    }
}

/// Bygger faste distanse-intervaller (1000 m som standard) mens akkumulatoren
/// går gjennom sporet.
///
/// Et segment som krysser en grense deles proporsjonalt med distansen, slik at
/// hver split lukkes nøyaktig på grensen og ingen intervaller overlapper.
///
/// Antall splits er begrenset av `max_splits`; den siste tar resten av
/// distansen, så arbeidet er begrenset av antall punkter pluss grensen.
#[derive(Debug, Clone)]
pub struct SplitBuilder {
    split_length_m: f64,
    min_trailing_split_m: f64,
    fallback_pace_s_per_m: f64,
    fallback_min_split_duration_s: f64,
    max_splits: usize,
    /// Ekstern totaltid finnes => ingen estimat-fallback.
    has_external_duration: bool,

    target_m: f64,
    closed_m: f64,
    current: SegmentShare,
    last_estimated: bool,
    splits: Vec<Split>,
}

impl SplitBuilder {
    pub fn new(cfg: &StatsConfig, has_external_duration: bool) -> Self {
        Self {
            split_length_m: cfg.split_length_m,
            min_trailing_split_m: cfg.min_trailing_split_m,
            fallback_pace_s_per_m: cfg.fallback_pace_s_per_m,
            fallback_min_split_duration_s: cfg.fallback_min_split_duration_s,
            max_splits: cfg.max_splits.max(1),
            has_external_duration,
            target_m: cfg.split_length_m,
            closed_m: 0.0,
            current: SegmentShare::default(),
            last_estimated: false,
            splits: Vec::new(),
        }
    }

    pub fn push_segment(&mut self, seg: SegmentShare) {
        if !seg.distance.is_finite() || seg.distance < 0.0 {
            return;
        }

        let mut rest = seg;
        // siste tillatte split lukkes av `finish`
        while self.splits.len() + 1 < self.max_splits
            && self.closed_m + self.current.distance + rest.distance >= self.target_m
        {
            let needed = (self.target_m - self.closed_m - self.current.distance).max(0.0);
            let frac = if rest.distance > 0.0 { (needed / rest.distance).min(1.0) } else { 1.0 };
            let head = rest.scaled(frac);
            rest = rest.minus(head);
            self.current.add(head);
            self.close_current();
            self.closed_m = self.target_m;
            let next = self.target_m + self.split_length_m;
            if next <= self.target_m {
                // f64 klarer ikke lenger å skille grensene
                break;
            }
            self.target_m = next;
        }
        self.current.add(rest);
    }

    /// Tid (s) for et intervall, med estimat når fart mangler.
    fn interval_duration_s(&self, interval: &SegmentShare) -> (f64, bool) {
        if interval.moving_s < self.fallback_min_split_duration_s && !self.has_external_duration {
            (interval.distance * self.fallback_pace_s_per_m, true)
        } else {
            (interval.moving_s, false)
        }
    }

    fn close_current(&mut self) {
        let interval = std::mem::take(&mut self.current);
        let (duration_s, estimated) = self.interval_duration_s(&interval);
        self.splits.push(Split {
            number: self.splits.len() as u32 + 1,
            distance: interval.distance,
            duration: duration_s * 1000.0,
            elevation_gain: interval.elevation_gain,
        });
        self.last_estimated = estimated;
    }

    /// Avslutter: restdistanse over terskelen blir en delvis split, ellers
    /// slås den sammen med forrige split (avrundingsstøy).
    pub fn finish(mut self) -> Vec<Split> {
        let rest = self.current;
        if rest.distance > self.min_trailing_split_m {
            self.close_current();
        } else if rest.distance > 0.0 {
            let extra_s = if self.last_estimated {
                rest.distance * self.fallback_pace_s_per_m
            } else {
                rest.moving_s
            };
            if let Some(last) = self.splits.last_mut() {
                last.distance += rest.distance;
                last.elevation_gain += rest.elevation_gain;
                last.duration += extra_s * 1000.0;
            }
        }
        self.splits
    }
}
