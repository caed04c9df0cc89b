//! The 64 gate ranges of the ecliptic.
//!
//! Gates follow the hexagram sequence laid around the zodiac, starting with
//! gate 25 at 28°15' Pisces. Each entry stores only its start; a range ends
//! where the next one begins, so the table partitions the circle exactly.

use crate::angles::dms;
use serde::{Deserialize, Serialize};

pub const GATE_COUNT: usize = 64;
pub const LINES_PER_GATE: u8 = 6;

// Zodiac sign starts
const AR: f64 = 0.0;
const TA: f64 = 30.0;
const GE: f64 = 60.0;
const CA: f64 = 90.0;
const LE: f64 = 120.0;
const VI: f64 = 150.0;
const LI: f64 = 180.0;
const SC: f64 = 210.0;
const SG: f64 = 240.0;
const CP: f64 = 270.0;
const AQ: f64 = 300.0;
const PI: f64 = 330.0;

// (sign start, degrees, minutes, seconds, gate)
const GATE_STARTS: [(f64, u32, u32, u32, u8); GATE_COUNT] = [
    (PI, 28, 15, 0, 25), (AR, 3, 52, 30, 17), (AR, 9, 30, 0, 21), (AR, 15, 7, 30, 51),
    (AR, 20, 45, 0, 42), (AR, 26, 22, 30, 3), (TA, 2, 0, 0, 27), (TA, 7, 37, 30, 24),
    (TA, 13, 15, 0, 2), (TA, 18, 52, 30, 23), (TA, 24, 30, 0, 8), (GE, 0, 7, 30, 20),
    (GE, 5, 45, 0, 16), (GE, 11, 22, 30, 35), (GE, 17, 0, 0, 45), (GE, 22, 37, 30, 12),
    (GE, 28, 15, 0, 15), (CA, 3, 52, 30, 52), (CA, 9, 30, 0, 39), (CA, 15, 7, 30, 53),
    (CA, 20, 45, 0, 62), (CA, 26, 22, 30, 56), (LE, 2, 0, 0, 31), (LE, 7, 37, 30, 33),
    (LE, 13, 15, 0, 7), (LE, 18, 52, 30, 4), (LE, 24, 30, 0, 29), (VI, 0, 7, 30, 59),
    (VI, 5, 45, 0, 40), (VI, 11, 22, 30, 64), (VI, 17, 0, 0, 47), (VI, 22, 37, 30, 6),
    (VI, 28, 15, 0, 46), (LI, 3, 52, 30, 18), (LI, 9, 30, 0, 48), (LI, 15, 7, 30, 57),
    (LI, 20, 45, 0, 32), (LI, 26, 22, 30, 50), (SC, 2, 0, 0, 28), (SC, 7, 37, 30, 44),
    (SC, 13, 15, 0, 1), (SC, 18, 52, 30, 43), (SC, 24, 30, 0, 14), (SG, 0, 7, 30, 34),
    (SG, 5, 45, 0, 9), (SG, 11, 22, 30, 5), (SG, 17, 0, 0, 26), (SG, 22, 37, 30, 11),
    (SG, 28, 15, 0, 10), (CP, 3, 52, 30, 58), (CP, 9, 30, 0, 38), (CP, 15, 7, 30, 54),
    (CP, 20, 45, 0, 61), (CP, 26, 22, 30, 60), (AQ, 2, 0, 0, 41), (AQ, 7, 37, 30, 19),
    (AQ, 13, 15, 0, 13), (AQ, 18, 52, 30, 49), (AQ, 24, 30, 0, 30), (PI, 0, 7, 30, 55),
    (PI, 5, 45, 0, 37), (PI, 11, 22, 30, 63), (PI, 17, 0, 0, 22), (PI, 22, 37, 30, 36),
];

/// One gate's arc of the ecliptic, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateRange {
    pub start: f64,
    pub end: f64,
    pub gate: u8,
}

impl GateRange {
    /// True for the single range that crosses 360°/0°.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    pub fn width(&self) -> f64 {
        (self.end - self.start).rem_euclid(360.0)
    }

    /// `lon` must already be normalized to [0, 360).
    pub fn contains(&self, lon: f64) -> bool {
        if self.wraps() {
            lon >= self.start || lon < self.end
        } else {
            self.start <= lon && lon < self.end
        }
    }

    /// Longitude halfway through the gate.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.width() / 2.0).rem_euclid(360.0)
    }
}

fn build_gate_table() -> Vec<GateRange> {
    let starts: Vec<(f64, u8)> = GATE_STARTS
        .iter()
        .map(|&(sign, d, m, s, gate)| (dms(sign, d, m, s), gate))
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(idx, &(start, gate))| GateRange {
            start,
            end: starts[(idx + 1) % starts.len()].0,
            gate,
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref GATE_TABLE: Vec<GateRange> = build_gate_table();
}

/// All 64 ranges in zodiacal order, starting with gate 25.
pub fn gate_ranges() -> &'static [GateRange] {
    &GATE_TABLE
}

/// Range of a gate by number (1..=64).
pub fn gate_range(gate: u8) -> Option<&'static GateRange> {
    GATE_TABLE.iter().find(|r| r.gate == gate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_table_has_every_gate_once() {
        let gates: BTreeSet<u8> = gate_ranges().iter().map(|r| r.gate).collect();
        assert_eq!(gates.len(), GATE_COUNT);
        assert_eq!(gates.iter().next(), Some(&1));
        assert_eq!(gates.iter().last(), Some(&64));
    }

    #[test]
    fn test_widths_sum_to_full_circle() {
        let total: f64 = gate_ranges().iter().map(|r| r.width()).sum();
        assert!((total - 360.0).abs() < 1e-9, "total = {total}");
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let ranges = gate_ranges();
        for (idx, range) in ranges.iter().enumerate() {
            let next = &ranges[(idx + 1) % ranges.len()];
            assert_eq!(range.end, next.start, "gap after gate {}", range.gate);
        }
    }

    #[test]
    fn test_only_gate_25_wraps() {
        let wrapping: Vec<u8> = gate_ranges()
            .iter()
            .filter(|r| r.wraps())
            .map(|r| r.gate)
            .collect();
        assert_eq!(wrapping, vec![25]);
    }

    #[test]
    fn test_gate_45_meets_gate_12() {
        let g45 = gate_range(45).unwrap();
        let g12 = gate_range(12).unwrap();
        assert_eq!(g45.end, g12.start);
        assert!((g45.end - 82.625).abs() < 1e-9);
    }
}
