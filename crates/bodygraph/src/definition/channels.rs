//! The 36 channels and the centers each one connects.

use crate::definition::centers::Center;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const CHANNEL_COUNT: usize = 36;

/// An unordered gate pair, stored with `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Channel {
    pub low: u8,
    pub high: u8,
}

impl Channel {
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn gates(&self) -> (u8, u8) {
        (self.low, self.high)
    }

    /// Centers joined by this channel, if it is one of the 36.
    pub fn centers(&self) -> Option<(Center, Center)> {
        channel_centers(self.low, self.high)
    }

    /// `"low-high"`, the form used by the persisted session record.
    pub fn label(&self) -> String {
        format!("{}-{}", self.low, self.high)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

// (gate, gate, center, center) with the lower gate first
const CHANNEL_TABLE: [(u8, u8, Center, Center); CHANNEL_COUNT] = {
    use Center::*;
    [
        (1, 8, G, Throat),
        (2, 14, G, Sacral),
        (3, 60, Sacral, Root),
        (4, 63, Ajna, Head),
        (5, 15, Sacral, G),
        (6, 59, SolarPlexus, Sacral),
        (7, 31, G, Throat),
        (9, 52, Sacral, Root),
        (10, 20, G, Throat),
        (10, 34, G, Sacral),
        (10, 57, G, Spleen),
        (11, 56, Ajna, Throat),
        (12, 22, Throat, SolarPlexus),
        (13, 33, G, Throat),
        (16, 48, Throat, Spleen),
        (17, 62, Ajna, Throat),
        (18, 58, Spleen, Root),
        (19, 49, Root, SolarPlexus),
        (20, 34, Throat, Sacral),
        (20, 57, Throat, Spleen),
        (21, 45, Ego, Throat),
        (23, 43, Throat, Ajna),
        (24, 61, Ajna, Head),
        (25, 51, G, Ego),
        (26, 44, Ego, Spleen),
        (27, 50, Sacral, Spleen),
        (28, 38, Spleen, Root),
        (29, 46, Sacral, G),
        (30, 41, SolarPlexus, Root),
        (32, 54, Spleen, Root),
        (34, 57, Sacral, Spleen),
        (35, 36, Throat, SolarPlexus),
        (37, 40, SolarPlexus, Ego),
        (39, 55, Root, SolarPlexus),
        (42, 53, Sacral, Root),
        (47, 64, Ajna, Head),
    ]
};

fn build_channel_lookup() -> HashMap<(u8, u8), (Center, Center)> {
    let mut lookup = HashMap::with_capacity(CHANNEL_COUNT * 2);
    for &(a, b, c1, c2) in CHANNEL_TABLE.iter() {
        lookup.insert((a, b), (c1, c2));
        lookup.insert((b, a), (c1, c2));
    }
    lookup
}

lazy_static::lazy_static! {
    static ref CHANNEL_LOOKUP: HashMap<(u8, u8), (Center, Center)> = build_channel_lookup();
}

/// Centers joined by the channel between `a` and `b`, in either order.
pub fn channel_centers(a: u8, b: u8) -> Option<(Center, Center)> {
    CHANNEL_LOOKUP.get(&(a, b)).copied()
}

/// The 36 canonical channels in table order.
pub fn canonical_channels() -> impl Iterator<Item = (Channel, (Center, Center))> {
    CHANNEL_TABLE
        .iter()
        .map(|&(a, b, c1, c2)| (Channel { low: a, high: b }, (c1, c2)))
}
