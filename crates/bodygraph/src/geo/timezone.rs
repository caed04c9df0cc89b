use crate::geo::resolver::ResolutionError;
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use log::warn;

pub fn parse_timezone(name: &str) -> Result<Tz, ResolutionError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ResolutionError::InvalidTimezone {
            timezone: name.to_string(),
        })
}

/// Convert a local civil time in an IANA zone to UTC.
///
/// A repeated local time (DST fall-back) resolves to the later, standard-time
/// instant. A skipped local time (DST gap) is read with the standard offset
/// in force before the transition, so 02:30 on a CET spring-forward night
/// lands at 01:30 UTC.
pub fn to_utc(local: NaiveDateTime, timezone: &str) -> Result<DateTime<Utc>, ResolutionError> {
    let tz = parse_timezone(timezone)?;
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(_, later) => Ok(later.with_timezone(&Utc)),
        LocalResult::None => {
            let standard = tz
                .offset_from_utc_datetime(&(local - Duration::days(1)))
                .fix();
            let utc = local - Duration::seconds(i64::from(standard.local_minus_utc()));
            warn!(
                "Local time {} falls in a DST gap in {}; using offset {}",
                local,
                timezone.trim(),
                standard
            );
            Ok(Utc.from_utc_datetime(&utc))
        }
    }
}
