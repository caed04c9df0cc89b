//! Design-time solver.
//!
//! The Design side of a chart is cast for the instant, before birth, at which
//! the Sun stood a fixed arc behind its birth longitude. The instant is found
//! by Newton-style refinement against the mean solar motion.

use crate::angles::{angular_difference, normalize_degrees};
use crate::ephemeris::{Body, Ephemeris, EphemerisError, ZodiacMode};
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ARC_DEGREES: f64 = 88.0;
pub const DEFAULT_CALENDAR_DAYS: f64 = 88.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 6;
pub const DEFAULT_TOLERANCE_DEGREES: f64 = 0.01;

/// Mean apparent motion of the Sun, degrees per day.
pub const MEAN_SOLAR_MOTION_DEG_PER_DAY: f64 = 0.985647;

/// How the Design instant is derived from the birth instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignMethod {
    /// Solve for the instant the Sun was `arc_degrees` behind its birth position.
    #[default]
    #[serde(rename = "degrees")]
    SolarArc,
    /// A fixed number of calendar days before birth.
    #[serde(rename = "days")]
    CalendarDays,
}

impl DesignMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            DesignMethod::SolarArc => "degrees",
            DesignMethod::CalendarDays => "days",
        }
    }
}

impl fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrees" | "solar_arc" | "arc" => Ok(DesignMethod::SolarArc),
            "days" | "calendar_days" => Ok(DesignMethod::CalendarDays),
            other => Err(format!("Unknown design method: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    pub arc_degrees: f64,
    pub max_iterations: u32,
    pub tolerance_degrees: f64,
    pub calendar_days: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            arc_degrees: DEFAULT_ARC_DEGREES,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance_degrees: DEFAULT_TOLERANCE_DEGREES,
            calendar_days: DEFAULT_CALENDAR_DAYS,
        }
    }
}

/// The Design instant together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSolution {
    pub instant: DateTime<Utc>,
    pub method: DesignMethod,
    /// Corrections applied after the seed guess.
    pub iterations: u32,
    /// Signed Sun offset from the target at `instant`; zero for calendar days.
    pub residual_degrees: f64,
    pub converged: bool,
}

fn days(value: f64) -> Duration {
    Duration::nanoseconds((value * 86_400.0 * 1e9).round() as i64)
}

/// Most recent instant before `birth` whose Sun longitude is
/// `birth_sun - arc_degrees` (mod 360).
///
/// Bounded by `max_iterations`; the last estimate is returned with
/// `converged == false` when the tolerance is not met.
pub fn find_design_instant<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: DateTime<Utc>,
    mode: ZodiacMode,
    params: &SolverParams,
) -> Result<DesignSolution, EphemerisError> {
    let birth_sun = ephemeris.longitude(Body::Sun, birth, mode)?;
    let target = normalize_degrees(birth_sun - params.arc_degrees);

    let mut guess = birth - days(params.arc_degrees);
    let mut error = angular_difference(ephemeris.longitude(Body::Sun, guess, mode)?, target);
    let mut iterations = 0;

    while error.abs() >= params.tolerance_degrees && iterations < params.max_iterations {
        guess = guess - days(error / MEAN_SOLAR_MOTION_DEG_PER_DAY);
        iterations += 1;
        error = angular_difference(ephemeris.longitude(Body::Sun, guess, mode)?, target);
        debug!("Design solver iteration {}: {} residual {:.6}°", iterations, guess, error);
    }

    let converged = error.abs() < params.tolerance_degrees;
    if !converged {
        warn!(
            "Design solver did not converge after {} iterations (residual {:.6}°), using last estimate {}",
            iterations, error, guess
        );
    }

    Ok(DesignSolution {
        instant: guess,
        method: DesignMethod::SolarArc,
        iterations,
        residual_degrees: error,
        converged,
    })
}

/// Exactly `calendar_days` before birth.
pub fn calendar_design_instant(birth: DateTime<Utc>, calendar_days: f64) -> DesignSolution {
    DesignSolution {
        instant: birth - days(calendar_days),
        method: DesignMethod::CalendarDays,
        iterations: 0,
        residual_degrees: 0.0,
        converged: true,
    }
}

/// Design instant for the chosen method.
pub fn solve<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: DateTime<Utc>,
    mode: ZodiacMode,
    method: DesignMethod,
    params: &SolverParams,
) -> Result<DesignSolution, EphemerisError> {
    match method {
        DesignMethod::SolarArc => find_design_instant(ephemeris, birth, mode, params),
        DesignMethod::CalendarDays => Ok(calendar_design_instant(birth, params.calendar_days)),
    }
}
