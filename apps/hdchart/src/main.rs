use anyhow::Context;
use bodygraph::{ChartAssembler, Completeness, DesignMethod, SwissEphemerisAdapter, ZodiacMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Zodiac {
    Tropical,
    Sidereal,
}

impl From<Zodiac> for ZodiacMode {
    fn from(z: Zodiac) -> Self {
        match z {
            Zodiac::Tropical => ZodiacMode::Tropical,
            Zodiac::Sidereal => ZodiacMode::Sidereal,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// Solve for the 88° solar arc before birth.
    Degrees,
    /// Exactly 88 calendar days before birth.
    Days,
}

impl From<Method> for DesignMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Degrees => DesignMethod::SolarArc,
            Method::Days => DesignMethod::CalendarDays,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a Human Design bodygraph and print it as JSON")]
struct Args {
    #[arg(long)]
    name: String,

    /// Local birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM.
    #[arg(long)]
    time: String,

    /// Birth place, looked up in the config's [[places]] table.
    #[arg(long)]
    place: String,

    /// Config file (default: configs/bodygraph.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured zodiac.
    #[arg(long, value_enum)]
    zodiac: Option<Zodiac>,

    /// Override the configured design-time method.
    #[arg(long, value_enum)]
    method: Option<Method>,

    /// Fail if any body cannot be computed.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = bodygraph_config::load_settings(args.config.as_deref())
        .context("loading bodygraph config")?;
    let gazetteer = settings.gazetteer();

    let mut chart_settings = settings.chart;
    if let Some(zodiac) = args.zodiac {
        chart_settings.zodiac = zodiac.into();
    }
    if let Some(method) = args.method {
        chart_settings.design_method = method.into();
    }
    if args.strict {
        chart_settings.completeness = Completeness::Strict;
    }

    let ephemeris = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("opening Swiss Ephemeris")?;
    log::info!("Ephemeris data: {}", ephemeris.ephemeris_path().display());

    let assembler = ChartAssembler::new(ephemeris, chart_settings);
    let chart = assembler
        .compute_for_place(&args.name, &args.date, &args.time, &args.place, &gazetteer)
        .with_context(|| format!("computing chart for {}", args.name))?;

    log::info!(
        "{} ({}, {}): birth {} / design {}",
        chart.input.place,
        chart.input.latitude,
        chart.input.longitude,
        chart.birth_utc,
        chart.design_utc
    );
    if !chart.is_complete() {
        log::warn!("{} bodies missing from the chart", chart.missing_bodies.len());
    }

    println!("{}", chart.to_json_pretty().context("serializing chart")?);
    Ok(())
}
