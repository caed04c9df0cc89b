use crate::angles::normalize_degrees;
use crate::ephemeris::ayanamsha::to_sidereal;
use crate::ephemeris::types::{Body, ZodiacMode};
use crate::ephemeris::Ephemeris;
use chrono::{DateTime, Utc};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::calc_ut;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Body {body} is not computed by the ephemeris engine")]
    UnknownBody { body: Body },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
}

// Swiss Ephemeris body codes
const BODY_CODES: &[(Body, i32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
    (Body::NorthNode, 11), // TRUE_NODE
];

// FLG_SWIEPH: use Swiss Ephemeris files, falling back to the analytic theory
const FLG_SWIEPH: i32 = 2;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris adapter implementation
#[derive(Debug, Clone)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// The path comes from the argument, then `SWISS_EPHEMERIS_PATH`, then
    /// `/usr/local/share/swisseph`, and must exist. It is only validated and
    /// reported here: the `swisseph` bindings expose no call for setting the
    /// data directory, so the engine keeps its own built-in search path and
    /// falls back to the analytic theory when files are absent.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn tropical_longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let code = body_code(body).ok_or(EphemerisError::UnknownBody { body })?;
        let jd = datetime_to_julian_day(instant);

        let result = calc_ut(jd, code as u32, FLG_SWIEPH as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("non-finite longitude {}", longitude),
            });
        }
        Ok(normalize_degrees(longitude))
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        mode: ZodiacMode,
    ) -> Result<f64, EphemerisError> {
        let tropical = self.tropical_longitude(body, instant)?;
        Ok(match mode {
            ZodiacMode::Tropical => tropical,
            ZodiacMode::Sidereal => to_sidereal(tropical, datetime_to_julian_day(instant)),
        })
    }
}

/// Swiss Ephemeris code for a directly computed body.
pub fn body_code(body: Body) -> Option<i32> {
    BODY_CODES
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, code)| *code)
}

/// Convert a UTC instant to a Julian Day (UT), keeping sub-second precision.
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    // JD of the Unix epoch
    const UNIX_EPOCH_JD: f64 = 2_440_587.5;
    let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
    UNIX_EPOCH_JD + seconds / 86_400.0
}
