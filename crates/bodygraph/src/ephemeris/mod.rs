pub mod adapter;
pub mod ayanamsha;
pub mod types;

pub use adapter::{datetime_to_julian_day, EphemerisError, SwissEphemerisAdapter};
pub use types::{Body, BodyPosition, LayerPositions, ZodiacMode};

use crate::angles::opposite;
use chrono::{DateTime, Utc};
use log::warn;

/// Planetary-position engine.
///
/// Implementors provide single-body longitude queries; the zodiac mode is
/// passed on every call so one chart never mixes references.
pub trait Ephemeris {
    /// Ecliptic longitude of a directly computed body, in [0, 360).
    fn longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        mode: ZodiacMode,
    ) -> Result<f64, EphemerisError>;

    /// Positions of all 13 chart bodies at `instant`.
    ///
    /// Bodies the engine cannot resolve are left out of `positions` and listed
    /// in `missing`. Earth and the South Node are derived by opposition and are
    /// missing whenever their source body is.
    fn positions(&self, instant: DateTime<Utc>, mode: ZodiacMode) -> LayerPositions {
        let mut layer = LayerPositions::default();

        for body in Body::QUERIED {
            match self.longitude(body, instant, mode) {
                Ok(lon) => layer.positions.push(BodyPosition { body, lon }),
                Err(e) => {
                    warn!("Omitting {} at {}: {}", body, instant, e);
                    layer.missing.push(body);
                }
            }
        }

        for body in Body::ALL.iter().copied().filter(|b| b.is_derived()) {
            let derived = body
                .opposition_of()
                .and_then(|source| layer.get(source))
                .map(opposite);
            match derived {
                Some(lon) => layer.positions.push(BodyPosition { body, lon }),
                None => layer.missing.push(body),
            }
        }

        layer.positions.sort_by_key(|p| p.body);
        layer.missing.sort();
        layer
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        mode: ZodiacMode,
    ) -> Result<f64, EphemerisError> {
        (**self).longitude(body, instant, mode)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        mode: ZodiacMode,
    ) -> Result<f64, EphemerisError> {
        (**self).longitude(body, instant, mode)
    }
}
