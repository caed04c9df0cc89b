#![allow(dead_code)]

use bodygraph::design::MEAN_SOLAR_MOTION_DEG_PER_DAY;
use bodygraph::gates::gate_range;
use bodygraph::geo::{Gazetteer, ResolvedPlace};
use bodygraph::{BirthInput, Body, Ephemeris, EphemerisError, ZodiacMode};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Birth Sun: gate 25 line 3, Earth gate 46 line 3.
/// Design Sun (88° earlier): gate 10 line 6, Earth gate 15 line 6.
pub const BIRTH_SUN: f64 = 1.0;

/// 1990-05-15 14:30 in Warsaw (CEST).
pub fn birth_utc() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 5, 15, 12, 30, 0).unwrap()
}

pub fn warsaw() -> ResolvedPlace {
    ResolvedPlace {
        name: "Warsaw".to_string(),
        latitude: 52.2297,
        longitude: 21.0122,
        timezone: "Europe/Warsaw".to_string(),
    }
}

pub fn gazetteer() -> Gazetteer {
    Gazetteer::with_places([warsaw()])
}

pub fn birth_input() -> BirthInput {
    BirthInput::new(
        "Test Person",
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        warsaw(),
    )
}

pub fn gate_midpoint(gate: u8) -> f64 {
    gate_range(gate).unwrap().midpoint()
}

/// Deterministic ephemeris.
///
/// The Sun moves at the mean solar rate from `sun_at_birth`; other bodies sit
/// still. Unplaced bodies rest in gate 25, and the North Node there puts the
/// South Node in gate 46, so only the scenario gates add channels.
pub struct ScriptedEphemeris {
    pub birth: DateTime<Utc>,
    pub sun_at_birth: f64,
    pub fixed: HashMap<Body, f64>,
    pub sun_only: bool,
    pub queried_modes: Mutex<Vec<ZodiacMode>>,
}

// Bodies that carry scenario gates, in assignment order
const PLACEABLE: [Body; 9] = [
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl ScriptedEphemeris {
    pub fn with_gates(gates: &[u8]) -> Self {
        assert!(gates.len() <= PLACEABLE.len());
        let filler = gate_midpoint(25);
        let mut fixed: HashMap<Body, f64> = PLACEABLE.iter().map(|&b| (b, filler)).collect();
        fixed.insert(Body::NorthNode, filler);
        for (body, gate) in PLACEABLE.iter().zip(gates) {
            fixed.insert(*body, gate_midpoint(*gate));
        }
        Self {
            birth: birth_utc(),
            sun_at_birth: BIRTH_SUN,
            fixed,
            sun_only: false,
            queried_modes: Mutex::new(Vec::new()),
        }
    }

    pub fn sun_only() -> Self {
        Self {
            sun_only: true,
            ..Self::with_gates(&[])
        }
    }

    pub fn with_birth_sun(mut self, sun: f64) -> Self {
        self.sun_at_birth = sun;
        self
    }

    pub fn sun_at(&self, instant: DateTime<Utc>) -> f64 {
        let elapsed_days = (instant - self.birth).num_milliseconds() as f64 / 86_400_000.0;
        (self.sun_at_birth + MEAN_SOLAR_MOTION_DEG_PER_DAY * elapsed_days).rem_euclid(360.0)
    }

    pub fn modes(&self) -> Vec<ZodiacMode> {
        self.queried_modes.lock().unwrap().clone()
    }
}

impl Ephemeris for ScriptedEphemeris {
    fn longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        mode: ZodiacMode,
    ) -> Result<f64, EphemerisError> {
        self.queried_modes.lock().unwrap().push(mode);
        if body == Body::Sun {
            return Ok(self.sun_at(instant));
        }
        if self.sun_only {
            return Err(EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: "no data".to_string(),
            });
        }
        self.fixed
            .get(&body)
            .copied()
            .ok_or(EphemerisError::UnknownBody { body })
    }
}
