use bodygraph::design::SolverParams;
use bodygraph::geo::{Gazetteer, ResolvedPlace};
use bodygraph::{ChartSettings, Completeness, DesignMethod, ZodiacMode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/bodygraph.toml", "../../configs/bodygraph.toml"];

#[derive(Debug, Clone)]
pub struct BodygraphSettings {
    pub chart: ChartSettings,
    pub ephemeris_path: Option<PathBuf>,
    pub places: Vec<ResolvedPlace>,
}

impl BodygraphSettings {
    pub fn gazetteer(&self) -> Gazetteer {
        Gazetteer::with_places(self.places.iter().cloned())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartToml {
    #[serde(default)]
    zodiac: Option<String>,
    #[serde(default)]
    design_method: Option<String>,
    #[serde(default)]
    arc_degrees: Option<f64>,
    #[serde(default)]
    calendar_days: Option<f64>,
    #[serde(default)]
    max_iterations: Option<u32>,
    #[serde(default)]
    tolerance_degrees: Option<f64>,
    #[serde(default)]
    completeness: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct PlaceToml {
    name: String,
    lat: f64,
    lon: f64,
    timezone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    places: Vec<PlaceToml>,
}

/// Read an explicit config file, or the first of the default relative paths.
pub fn read_config_toml_text(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path {
        return fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()));
    }
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load bodygraph.toml from {:?}", DEFAULT_CONFIG_PATHS);
}

fn parse_field<T: std::str::FromStr<Err = String>>(
    value: Option<String>,
    field: &str,
) -> anyhow::Result<Option<T>> {
    value
        .map(|v| v.parse::<T>().map_err(|e| anyhow::anyhow!("chart.{field}: {e}")))
        .transpose()
}

fn chart_settings(cfg: ChartToml) -> anyhow::Result<ChartSettings> {
    let ChartToml {
        zodiac,
        design_method,
        arc_degrees,
        calendar_days,
        max_iterations,
        tolerance_degrees,
        completeness,
    } = cfg;

    let defaults = SolverParams::default();
    let solver = SolverParams {
        arc_degrees: arc_degrees.unwrap_or(defaults.arc_degrees),
        max_iterations: max_iterations.unwrap_or(defaults.max_iterations),
        tolerance_degrees: tolerance_degrees.unwrap_or(defaults.tolerance_degrees),
        calendar_days: calendar_days.unwrap_or(defaults.calendar_days),
    };
    if !(solver.arc_degrees > 0.0 && solver.arc_degrees < 360.0) {
        anyhow::bail!("chart.arc_degrees must be in (0, 360), got {}", solver.arc_degrees);
    }
    if !(solver.calendar_days > 0.0) {
        anyhow::bail!("chart.calendar_days must be positive, got {}", solver.calendar_days);
    }
    if solver.max_iterations == 0 {
        anyhow::bail!("chart.max_iterations must be at least 1");
    }
    if !(solver.tolerance_degrees > 0.0) {
        anyhow::bail!(
            "chart.tolerance_degrees must be positive, got {}",
            solver.tolerance_degrees
        );
    }

    Ok(ChartSettings {
        zodiac: parse_field::<ZodiacMode>(zodiac, "zodiac")?.unwrap_or_default(),
        design_method: parse_field::<DesignMethod>(design_method, "design_method")?
            .unwrap_or_default(),
        solver,
        completeness: parse_field::<Completeness>(completeness, "completeness")?
            .unwrap_or_default(),
    })
}

fn place(cfg: PlaceToml) -> anyhow::Result<ResolvedPlace> {
    let PlaceToml {
        name,
        lat,
        lon,
        timezone,
    } = cfg;
    if name.trim().is_empty() {
        anyhow::bail!("places entry has an empty name");
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        anyhow::bail!("place {name}: coordinates out of range ({lat}, {lon})");
    }
    Ok(ResolvedPlace {
        name,
        latitude: lat,
        longitude: lon,
        timezone,
    })
}

pub fn parse_settings(text: &str) -> anyhow::Result<BodygraphSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse bodygraph.toml: {e}"))?;
    let chart = chart_settings(root.chart.unwrap_or_default())?;
    let places = root
        .places
        .into_iter()
        .map(place)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(BodygraphSettings {
        chart,
        ephemeris_path: root.ephemeris.and_then(|e| e.path),
        places,
    })
}

pub fn load_settings(path: Option<&Path>) -> anyhow::Result<BodygraphSettings> {
    let text = read_config_toml_text(path)?;
    parse_settings(&text)
}
