use crate::angles::normalize_degrees;
use crate::gates::table::{gate_ranges, GateRange, LINES_PER_GATE};
use serde::{Deserialize, Serialize};

/// Gate and line (both 1-based) activated by a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateLine {
    pub gate: u8,
    pub line: u8,
}

/// Range containing `longitude`, or `None` if no range matches.
pub fn gate_bounds(longitude: f64) -> Option<&'static GateRange> {
    let lon = normalize_degrees(longitude);
    gate_ranges().iter().find(|range| range.contains(lon))
}

/// Map a longitude to its gate and line.
///
/// `None` is the unmapped sentinel. The table covers the whole circle, so
/// only non-finite input ends up there.
pub fn gate_and_line(longitude: f64) -> Option<GateLine> {
    let range = gate_bounds(longitude)?;
    Some(GateLine {
        gate: range.gate,
        line: line_within(range, longitude),
    })
}

/// Line of `longitude` inside `range`, clamped to 1..=6.
pub fn line_within(range: &GateRange, longitude: f64) -> u8 {
    let width = range.width();
    if width == 0.0 {
        return 1;
    }
    let fraction = (longitude - range.start).rem_euclid(360.0) / width;
    let line = (fraction * LINES_PER_GATE as f64).floor() as i64 + 1;
    line.clamp(1, LINES_PER_GATE as i64) as u8
}
