//! Angular helpers shared by the ephemeris, gate mapper and design-time solver.

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Signed shortest-path difference `a - b` in (-180, 180].
///
/// Positive means `a` lies ahead of `b` in zodiacal order.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Point diametrically opposite `longitude`, in [0, 360).
pub fn opposite(longitude: f64) -> f64 {
    normalize_degrees(longitude + 180.0)
}

/// Sign start plus degrees, arcminutes and arcseconds.
pub fn dms(sign_start: f64, degrees: u32, minutes: u32, seconds: u32) -> f64 {
    sign_start + degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}
