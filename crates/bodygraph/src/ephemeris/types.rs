use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodies that contribute activations to a chart, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Earth,
    Moon,
    NorthNode,
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Earth,
        Body::Moon,
        Body::NorthNode,
        Body::SouthNode,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Bodies queried directly from the ephemeris engine.
    pub const QUERIED: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::NorthNode,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::NorthNode => "North Node",
            Body::SouthNode => "South Node",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// For derived bodies, the body whose opposition point they are.
    pub fn opposition_of(self) -> Option<Body> {
        match self {
            Body::Earth => Some(Body::Sun),
            Body::SouthNode => Some(Body::NorthNode),
            _ => None,
        }
    }

    pub fn is_derived(self) -> bool {
        self.opposition_of().is_some()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zodiac reference used for every longitude of one chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacMode {
    #[default]
    Tropical,
    /// Sidereal zodiac with the Lahiri ayanamsha.
    Sidereal,
}

impl ZodiacMode {
    pub fn label(self) -> &'static str {
        match self {
            ZodiacMode::Tropical => "Tropical",
            ZodiacMode::Sidereal => "Sidereal",
        }
    }
}

impl FromStr for ZodiacMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tropical" => Ok(ZodiacMode::Tropical),
            "sidereal" => Ok(ZodiacMode::Sidereal),
            other => Err(format!(
                "Unknown zodiac mode: {}. Valid modes: [\"tropical\", \"sidereal\"]",
                other
            )),
        }
    }
}

/// Ecliptic longitude of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub lon: f64,
}

/// Positions for one side of a chart, plus the bodies the engine could not resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerPositions {
    /// Resolved bodies in canonical order
    pub positions: Vec<BodyPosition>,
    /// Bodies that were requested but could not be computed
    pub missing: Vec<Body>,
}

impl LayerPositions {
    pub fn get(&self, body: Body) -> Option<f64> {
        self.positions
            .iter()
            .find(|p| p.body == body)
            .map(|p| p.lon)
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
