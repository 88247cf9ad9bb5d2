//! `panjika`: panchang for one civil date and place, printed as JSON.
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`) so stdout stays a single
//! JSON document, either the report or `{"error", "details"}`.

mod report;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use panjika_ephem::{AnalyticEphemeris, GeoLocation, SiderealMode};
use panjika_search::{PanchangConfig, PanchangRequest, panchang_for_date};
use panjika_time::parse_timezone;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "panjika", about = "Panchang for a civil date and place")]
struct Cli {
    /// Civil date (YYYY-MM-DD); defaults to today in the request timezone
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Latitude in degrees, north positive
    #[arg(long, default_value_t = 22.5726, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, default_value_t = 88.3639, allow_hyphen_values = true)]
    lon: f64,
    /// Altitude above sea level in meters
    #[arg(long, default_value_t = 0.0)]
    alt: f64,
    /// IANA timezone name
    #[arg(long, default_value = "Asia/Kolkata")]
    tz: String,
    /// Sidereal mode: lahiri, true_lahiri, kp, raman, fagan_bradley, yukteshwar
    #[arg(long, value_parser = parse_mode)]
    ayanamsha: Option<SiderealMode>,
    /// TOML engine config; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn parse_mode(s: &str) -> Result<SiderealMode, String> {
    serde_json::from_value(serde_json::Value::String(s.to_ascii_lowercase()))
        .map_err(|_| format!("unknown sidereal mode '{s}'"))
}

fn parse_config(text: &str) -> Result<PanchangConfig> {
    let config: PanchangConfig = toml::from_str(text).context("malformed config")?;
    config
        .validate()
        .map_err(|e| anyhow!("invalid config: {e}"))?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<PanchangConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading config {}", path.display()))
}

fn run(cli: &Cli) -> Result<Report> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PanchangConfig::default(),
    };
    if let Some(mode) = cli.ayanamsha {
        config.sidereal_mode = mode;
    }

    let tz = parse_timezone(&cli.tz)?;
    let date = cli
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&tz).date_naive());
    let request = PanchangRequest {
        date,
        location: GeoLocation::new(cli.lat, cli.lon, cli.alt),
        timezone: tz,
    };
    debug!(%date, lat = cli.lat, lon = cli.lon, tz = %cli.tz, ?config.sidereal_mode, "panchang request");

    let provider = AnalyticEphemeris::new(config.riseset);
    let record = panchang_for_date(&provider, &request, &config)
        .with_context(|| format!("panchang for {date} at {:.4}, {:.4}", cli.lat, cli.lon))?;
    Ok(Report::from_record(&record)?)
}

fn to_json(report: &Report, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    match run(&cli).and_then(|report| to_json(&report, cli.pretty)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            let body = serde_json::json!({
                "error": "Panchang Engine Error",
                "details": format!("{e:#}"),
            });
            println!("{body}");
            ExitCode::FAILURE
        }
    }
}
