use crate::chart::error::ChartError;
use crate::geo::{to_utc, PlaceResolver, ResolutionError, ResolvedPlace};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Birth data for one chart: local civil date and time at a resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl BirthInput {
    /// Build from an already resolved place.
    pub fn new(name: impl Into<String>, date: NaiveDate, time: NaiveTime, place: ResolvedPlace) -> Self {
        Self {
            name: name.into(),
            date,
            time,
            place: place.name,
            latitude: place.latitude,
            longitude: place.longitude,
            timezone: place.timezone,
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]` and look the place up.
    pub fn resolve(
        name: &str,
        date: &str,
        time: &str,
        place: &str,
        resolver: &dyn PlaceResolver,
    ) -> Result<Self, ChartError> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        let resolved = resolver.resolve(place)?;
        Ok(Self::new(name, date, time, resolved))
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn to_utc(&self) -> Result<DateTime<Utc>, ResolutionError> {
        to_utc(self.local_datetime(), &self.timezone)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| ChartError::InvalidBirthInput {
        field: "date",
        value: value.to_string(),
        message: e.to_string(),
    })
}

pub fn parse_time(value: &str) -> Result<NaiveTime, ChartError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| ChartError::InvalidBirthInput {
            field: "time",
            value: value.to_string(),
            message: e.to_string(),
        })
}
