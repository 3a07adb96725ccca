use serde::{Deserialize, Serialize};
use std::fmt;

/// Aktivitetstype slik appen lagrer den (nøklene er wire-format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityType {
    #[default]
    #[serde(rename = "trekking")]
    Trekking,
    #[serde(rename = "camminata")]
    Walking,
    #[serde(rename = "corsa")]
    Running,
    #[serde(rename = "trail-running")]
    TrailRunning,
    #[serde(rename = "alpinismo")]
    Mountaineering,
    #[serde(rename = "scialpinismo")]
    SkiTouring,
    #[serde(rename = "bike")]
    Bike,
    #[serde(rename = "mtb")]
    Mtb,
    #[serde(rename = "ebike")]
    EBike,
    /// Ukjent nøkkel – gir default fartstak og trekking-gruppe.
    #[serde(rename = "default", other)]
    Other,
}

/// Grovinndeling brukt av dashboard/utfordringer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityGroup {
    Trekking,
    Run,
    Bike,
}

impl ActivityType {
    pub const ALL: [ActivityType; 10] = [
        ActivityType::Trekking,
        ActivityType::Walking,
        ActivityType::Running,
        ActivityType::TrailRunning,
        ActivityType::Mountaineering,
        ActivityType::SkiTouring,
        ActivityType::Bike,
        ActivityType::Mtb,
        ActivityType::EBike,
        ActivityType::Other,
    ];

    /// Total mapping fra nøkkel; ukjent => `Other`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "trekking" => ActivityType::Trekking,
            "camminata" => ActivityType::Walking,
            "corsa" => ActivityType::Running,
            "trail-running" => ActivityType::TrailRunning,
            "alpinismo" => ActivityType::Mountaineering,
            "scialpinismo" => ActivityType::SkiTouring,
            "bike" => ActivityType::Bike,
            "mtb" => ActivityType::Mtb,
            "ebike" => ActivityType::EBike,
            _ => ActivityType::Other,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ActivityType::Trekking => "trekking",
            ActivityType::Walking => "camminata",
            ActivityType::Running => "corsa",
            ActivityType::TrailRunning => "trail-running",
            ActivityType::Mountaineering => "alpinismo",
            ActivityType::SkiTouring => "scialpinismo",
            ActivityType::Bike => "bike",
            ActivityType::Mtb => "mtb",
            ActivityType::EBike => "ebike",
            ActivityType::Other => "default",
        }
    }

    /// Øvre grense for plausibel momentanfart (m/s). Samples på eller over
    /// taket regnes som GPS-spikes og teller ikke som makshastighet.
    pub fn max_speed_ms(self) -> f64 {
        match self {
            ActivityType::Trekking | ActivityType::Walking => 5.5,
            ActivityType::Running => 12.0,
            ActivityType::TrailRunning => 10.0,
            ActivityType::Mountaineering => 4.0,
            ActivityType::SkiTouring => 30.0,
            ActivityType::Bike => 33.0,
            ActivityType::Mtb | ActivityType::EBike => 28.0,
            ActivityType::Other => 25.0,
        }
    }

    pub fn group(self) -> ActivityGroup {
        match self {
            ActivityType::Trekking
            | ActivityType::Walking
            | ActivityType::Mountaineering
            | ActivityType::SkiTouring
            | ActivityType::Other => ActivityGroup::Trekking,
            ActivityType::Running | ActivityType::TrailRunning => ActivityGroup::Run,
            ActivityType::Bike | ActivityType::Mtb | ActivityType::EBike => ActivityGroup::Bike,
        }
    }
}

impl From<&str> for ActivityType {
    fn from(key: &str) -> Self {
        ActivityType::from_key(key)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip_for_known_types() {
        for a in ActivityType::ALL {
            if a == ActivityType::Other {
                continue;
            }
            assert_eq!(ActivityType::from_key(a.key()), a, "nøkkel {}", a.key());
        }
    }

    #[test]
    fn unknown_key_falls_back_to_default_ceiling() {
        let a = ActivityType::from_key("paragliding");
        assert_eq!(a, ActivityType::Other);
        assert_eq!(a.max_speed_ms(), 25.0);
        assert_eq!(a.group(), ActivityGroup::Trekking);
    }

    #[test]
    fn from_key_is_case_and_whitespace_tolerant() {
        assert_eq!(ActivityType::from_key("  MTB "), ActivityType::Mtb);
        assert_eq!(ActivityType::from_key("Trail-Running"), ActivityType::TrailRunning);
    }

    #[test]
    fn serde_maps_unknown_to_other() {
        let a: ActivityType = serde_json::from_str("\"kayak\"").unwrap();
        assert_eq!(a, ActivityType::Other);
        let b: ActivityType = serde_json::from_str("\"scialpinismo\"").unwrap();
        assert_eq!(b, ActivityType::SkiTouring);
        assert_eq!(b.max_speed_ms(), 30.0);
    }
}
