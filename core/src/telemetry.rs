use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Tellere for grenselagene (JSON, CLI, Python). Kjerneberegningen rører dem ikke.
///
/// En teller som ikke kunne opprettes er `None` og hoppes over.
pub struct Telemetry {
    pub registry: Registry,
    pub tracks_total: Option<IntCounter>,
    pub points_total: Option<IntCounter>,
    pub splits_total: Option<IntCounter>,
    pub short_tracks_total: Option<IntCounter>,
}

fn counter(registry: &Registry, name: &str, help: &str) -> Option<IntCounter> {
    let c = match IntCounter::new(name, help) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("kunne ikke opprette teller {name}: {e}");
            return None;
        }
    };
    if let Err(e) = registry.register(Box::new(c.clone())) {
        log::warn!("kunne ikke registrere {name}: {e}");
    }
    Some(c)
}

static TELEMETRY: Lazy<Telemetry> = Lazy::new(|| {
    let registry = Registry::new();
    Telemetry {
        tracks_total: counter(&registry, "trackstats_tracks_total", "Spor beregnet"),
        points_total: counter(&registry, "trackstats_points_total", "Punkter behandlet"),
        splits_total: counter(&registry, "trackstats_splits_total", "Splits produsert"),
        short_tracks_total: counter(
            &registry,
            "trackstats_short_tracks_total",
            "Spor med færre enn 2 punkter",
        ),
        registry,
    }
});

pub fn telemetry() -> &'static Telemetry {
    &TELEMETRY
}

pub fn record(points: usize, splits: usize) {
    let t = telemetry();
    if let Some(c) = &t.tracks_total {
        c.inc();
    }
    if let Some(c) = &t.points_total {
        c.inc_by(points as u64);
    }
    if let Some(c) = &t.splits_total {
        c.inc_by(splits as u64);
    }
    if points < 2 {
        if let Some(c) = &t.short_tracks_total {
            c.inc();
        }
    }
}

/// Prometheus tekstformat for alle tellere.
pub fn gather_text() -> String {
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&telemetry().registry.gather(), &mut buf) {
        log::warn!("kunne ikke serialisere metrics: {e}");
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
