//! trackstats - beregner statistikk for et spor fra en JSON-forespørsel
//!
//! Bruk:
//!   trackstats <request.json> [--config <fil>] [--activity <type>] [--duration-ms <ms>]
//!              [--report] [--pretty] [--metrics]
//!
//! `-` som filnavn leser forespørselen fra stdin.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{Read, Write};
use std::path::PathBuf;

use trackstats_core::cli::format_report;
use trackstats_core::json::{run_request, TrackStatsRequest};
use trackstats_core::{load_config, telemetry, track_xp, ActivityType};

#[derive(Parser)]
#[command(name = "trackstats")]
#[command(about = "Distanse, høydemeter, tempo og splits for et GPS-spor", long_about = None)]
struct Cli {
    /// JSON-forespørsel ({ points, precalculatedDuration, activityType }), eller `-` for stdin
    input: PathBuf,

    /// Config-fil (JSON) med parametre; mangler den brukes default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overstyr aktivitetstype (f.eks. "trekking", "corsa", "mtb")
    #[arg(short, long)]
    activity: Option<String>,

    /// Overstyr total varighet i millisekunder
    #[arg(long)]
    duration_ms: Option<f64>,

    /// Skriv tekstrapport i stedet for JSON
    #[arg(long)]
    report: bool,

    /// Pen JSON
    #[arg(long)]
    pretty: bool,

    /// Skriv prometheus-tellere til stderr til slutt
    #[arg(long)]
    metrics: bool,

    /// Regn XP som om sporet er delt offentlig
    #[arg(long)]
    public: bool,
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("kunne ikke lese stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("kunne ikke lese {}", path.display()))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let raw = read_input(&cli.input)?;
    let mut req = TrackStatsRequest::parse(&raw).context("ugyldig forespørsel")?;

    if let Some(path) = &cli.config {
        let cfg = load_config(path).with_context(|| format!("ugyldig config {}", path.display()))?;
        req.set_default_config(cfg);
    }
    if let Some(a) = &cli.activity {
        req.set_activity(ActivityType::from_key(a));
    }
    if let Some(ms) = cli.duration_ms {
        req.set_precalculated_duration_ms(ms);
    }

    info!("beregner statistikk for {} punkter", req.point_count());
    let out = run_request(req).context("beregning feilet")?;
    info!(
        "ferdig: {:.2} km, +{:.0} m, {} splits, {} XP",
        out.stats.distance / 1000.0,
        out.stats.elevation_gain,
        out.splits.len(),
        track_xp(&out.stats, cli.public)
    );

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if cli.report {
        write!(handle, "{}", format_report(&out))?;
    } else if cli.pretty {
        writeln!(handle, "{}", serde_json::to_string_pretty(&out)?)?;
    } else {
        writeln!(handle, "{}", serde_json::to_string(&out)?)?;
    }

    if cli.metrics {
        eprint!("{}", telemetry::gather_text());
    }
    Ok(())
}
