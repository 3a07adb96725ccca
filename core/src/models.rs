use serde::{Deserialize, Serialize};

/// Ett punkt i sporet, i projisert plan (meter-ekvivalent).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackPoint {
    pub x: f64,
    pub y: f64,
    pub altitude: Option<f64>, // meter
    pub speed: Option<f64>,    // m/s, momentan fra GPS
}

impl TrackPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, altitude: None, speed: None }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Planar avstand til et annet punkt (meter).
    #[inline]
    pub fn distance_to(&self, other: &TrackPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Høyde for glatting: manglende høyde => 0.
    #[inline]
    pub fn altitude_or_zero(&self) -> f64 {
        self.altitude.unwrap_or(0.0)
    }

    /// Fart for tid/makshastighet: manglende (eller negativ) fart => 0.
    #[inline]
    pub fn speed_or_zero(&self) -> f64 {
        self.speed.filter(|v| *v > 0.0).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStats {
    pub distance: f64,       // meter
    pub max_altitude: f64,   // meter
    pub min_altitude: f64,   // meter
    pub elevation_gain: f64, // meter
    pub elevation_loss: f64, // meter
    pub duration: f64,       // ms, fra kaller (0 = ukjent)
    pub moving_time: f64,    // ms
    pub avg_pace: f64,        // min/km
    pub avg_moving_pace: f64, // min/km
    pub max_speed: f64,        // km/t
    pub avg_speed: f64,        // km/t
    pub avg_moving_speed: f64, // km/t
    pub vam: f64,              // m/t
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub number: u32,
    /// Meter. Ikke begrenset til splitlengden: en rest på inntil
    /// `min_trailing_split_m` slås inn i siste split (f.eks. 1000.8 m), og
    /// ved `max_splits` tar siste split hele resten.
    pub distance: f64,
    pub duration: f64,       // ms
    pub elevation_gain: f64, // meter
}

/// Nedsamplet serie for graf: `labels` er kumulativ distanse i km (1 desimal).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<f64>,
    pub data: Vec<f64>,
    /// Indeks til kildepunktet hver sample er hentet fra.
    pub point_indices: Vec<usize>,
}

impl ChartSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            labels: Vec::with_capacity(n),
            data: Vec::with_capacity(n),
            point_indices: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, label: f64, value: f64, point_index: usize) {
        self.labels.push(label);
        self.data.push(value);
        self.point_indices.push(point_index);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Samlet resultat fra én beregning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStatsOutput {
    pub stats: TrackStats,
    #[serde(rename = "elevationChartData")]
    pub elevation_chart: ChartSeries,
    #[serde(rename = "speedChartData")]
    pub speed_chart: ChartSeries,
    pub splits: Vec<Split>,
}
