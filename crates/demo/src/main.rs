// File: crates/demo/src/main.rs
// Summary: Demo loads a forecast (CSV or built-in mock) and renders weather/air-quality charts to PNGs.

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use envchart_core::{AqiLevel, ChartConfig, ChartEngine, ChartKind, RenderOptions, Series};
use log::info;
use std::path::{Path, PathBuf};

/// Render environmental forecast charts to PNG files.
#[derive(Parser, Debug)]
#[command(name = "envchart-demo")]
struct Args {
    /// CSV with a label column (day/label/date) and a value column; requires --kind
    input: Option<PathBuf>,

    /// Chart kind for the CSV input: continuous or categorical
    #[arg(long)]
    kind: Option<String>,

    /// TOML chart configuration (padding, gridLines, barWidthFraction, unit, theme)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logical surface width
    #[arg(long, default_value = "800")]
    width: f32,

    /// Logical surface height
    #[arg(long, default_value = "256")]
    height: f32,

    /// Device pixel ratio
    #[arg(long, default_value = "1.0")]
    dpr: f32,

    /// Output directory for PNGs
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(p) => ChartConfig::load(p)?,
        None => ChartConfig::default(),
    };
    let opts = RenderOptions { width: args.width, height: args.height, dpr: args.dpr };
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    if let Some(input) = &args.input {
        let kind: ChartKind = args
            .kind
            .as_deref()
            .context("--kind is required with a CSV input")?
            .parse()?;
        let series = load_series_csv(input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
        println!("Loaded {} points from {}", series.len(), input.display());
        if series.is_empty() {
            anyhow::bail!("no rows loaded; check headers/delimiter.");
        }
        let engine = ChartEngine::new(base)?;
        let out = out_name(&args.out_dir, input, kind);
        engine.render_to_png(&series, kind, &opts, &out)?;
        println!("Wrote {}", out.display());
        return Ok(());
    }

    // Built-in five-day mock forecast
    let labels = forecast_labels(Local::now().date_naive(), 5);
    let temps = Series::from_pairs(labels.iter().cloned().zip([22.0, 25.0, 19.0, 21.0, 24.0]));
    let aqi = Series::from_pairs(labels.iter().cloned().zip([65.0, 45.0, 85.0, 55.0, 35.0]));

    for dp in &aqi {
        let level = AqiLevel::classify(dp.value());
        info!("{}: AQI {} ({}) - {}", dp.label(), dp.value(), level.name(), level.recommendation());
    }

    let weather = ChartEngine::new(base.clone().with_unit("°C"))?;
    let out = args.out_dir.join("chart_weather.png");
    weather.render_to_png(&temps, ChartKind::Continuous, &opts, &out)?;
    println!("Wrote {}", out.display());

    let air = ChartEngine::new(base)?;
    let out = args.out_dir.join("chart_air_quality.png");
    air.render_to_png(&aqi, ChartKind::Categorical, &opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// "Today", "Tomorrow", then weekday names.
fn forecast_labels(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days)
        .map(|i| match i {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => (today + Duration::days(i as i64)).format("%A").to_string(),
        })
        .collect()
}

/// Produce output file name like <out_dir>/chart_<stem>_<kind>.png
fn out_name(out_dir: &Path, input: &Path, kind: ChartKind) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    out_dir.join(format!("chart_{stem}_{kind}.png"))
}

/// Load a `label,value` CSV into a checked series.
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!("CSV headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["day", "label", "date"]).context("no label column (day/label/date)")?;
    let i_value = idx(&["value", "temp", "temperature", "aqi"]).context("no value column (value/temp/aqi)")?;

    let mut rows = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).unwrap_or_default().to_string();
        let raw = rec.get(i_value).unwrap_or_default();
        let value: f64 = raw
            .parse()
            .with_context(|| format!("row {}: value '{raw}' is not a number", n + 1))?;
        rows.push((label, value));
    }
    Ok(Series::try_from_pairs(rows)?)
}
