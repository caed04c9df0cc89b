use crate::chart::input::BirthInput;
use crate::chart::settings::CalculationInfo;
use crate::classify::{Authority, HdType, Profile, Strategy};
use crate::definition::{Center, Channel};
use crate::design::DesignSolution;
use crate::ephemeris::Body;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which instant an activation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Birth instant.
    Personality,
    /// Solar-arc instant before birth.
    Design,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Personality, Side::Design];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Personality => f.write_str("Personality"),
            Side::Design => f.write_str("Design"),
        }
    }
}

/// One body's position mapped onto the bodygraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    pub side: Side,
    pub body: Body,
    pub longitude: f64,
    /// `None` only for an unmappable longitude.
    pub gate: Option<u8>,
    pub line: Option<u8>,
    pub center: Option<Center>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MissingBody {
    pub side: Side,
    pub body: Body,
}

impl fmt::Display for MissingBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.body)
    }
}

// Personality bodies summarized by `key_gates`
const KEY_BODIES: [Body; 5] = [
    Body::Sun,
    Body::Earth,
    Body::Moon,
    Body::NorthNode,
    Body::SouthNode,
];

/// A computed bodygraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub input: BirthInput,
    pub birth_utc: DateTime<Utc>,
    pub design_utc: DateTime<Utc>,
    pub settings: CalculationInfo,
    #[serde(rename = "type")]
    pub hd_type: HdType,
    pub strategy: Strategy,
    pub authority: Authority,
    pub profile: Profile,
    pub defined_centers: BTreeSet<Center>,
    pub undefined_centers: BTreeSet<Center>,
    pub defined_channels: BTreeSet<Channel>,
    pub active_gates: BTreeSet<u8>,
    pub motor_to_throat: bool,
    /// Personality side first, each side in canonical body order.
    pub activations: Vec<Activation>,
    pub design_solution: DesignSolution,
    pub missing_bodies: Vec<MissingBody>,
}

impl ChartResult {
    /// All 26 activations were computed.
    pub fn is_complete(&self) -> bool {
        self.missing_bodies.is_empty()
    }

    pub fn activation(&self, side: Side, body: Body) -> Option<&Activation> {
        self.activations
            .iter()
            .find(|a| a.side == side && a.body == body)
    }

    pub fn side_activations(&self, side: Side) -> impl Iterator<Item = &Activation> {
        self.activations.iter().filter(move |a| a.side == side)
    }

    /// Personality gates of the Sun, Earth, Moon and both nodes, keyed by
    /// lowercase body name.
    pub fn key_gates(&self) -> BTreeMap<String, u8> {
        KEY_BODIES
            .iter()
            .filter_map(|&body| {
                let gate = self.activation(Side::Personality, body)?.gate?;
                Some((body.name().to_lowercase(), gate))
            })
            .collect()
    }

    /// Defined channels as `"a-b"` with `a < b`.
    pub fn channel_labels(&self) -> Vec<String> {
        self.defined_channels.iter().map(Channel::label).collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
