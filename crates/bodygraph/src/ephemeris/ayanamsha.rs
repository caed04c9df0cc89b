//! Lahiri ayanamsha for the sidereal zodiac mode.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (anchored
//! to the vernal equinox) and the sidereal zodiac (anchored to the fixed
//! stars). Lahiri places Spica at 0° Libra; its value at J2000.0 is 23.853°
//! and it grows with the IAU 2006 general precession in longitude.
//!
//! Applying the offset here keeps the engine free of any global sidereal
//! mode, so the zodiac choice stays a per-call parameter.

use crate::angles::normalize_degrees;

pub const J2000_JD: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Lahiri ayanamsha at J2000.0, in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// `t` is Julian centuries since J2000.0. The UT/TT difference is far below
/// the gate resolution and is ignored.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3
        - 0.000023857 * t4
        - 0.0000000383 * t5;
    arcsec / 3600.0
}

/// Julian centuries since J2000.0 for a Julian Day.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Mean Lahiri ayanamsha in degrees at a Julian Day.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_longitude_deg(julian_centuries(jd))
}

/// Convert a tropical longitude to the Lahiri sidereal zodiac.
pub fn to_sidereal(tropical_lon: f64, jd: f64) -> f64 {
    normalize_degrees(tropical_lon - lahiri_ayanamsha_deg(jd))
}
