use crate::geo::timezone::parse_timezone;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors turning a birth place and local time into a UTC instant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("Place not found: {place}")]
    PlaceNotFound { place: String },
    #[error("Timezone for {place} could not be determined (got {timezone:?})")]
    TimezoneNotFound { place: String, timezone: String },
    #[error("Invalid IANA timezone: {timezone:?}")]
    InvalidTimezone { timezone: String },
}

/// Coordinates and IANA zone for a named place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// Geocoding collaborator: place name to coordinates and timezone.
pub trait PlaceResolver {
    fn resolve(&self, place: &str) -> Result<ResolvedPlace, ResolutionError>;
}

/// In-memory place table, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: HashMap<String, ResolvedPlace>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a place.
    pub fn insert(&mut self, place: ResolvedPlace) {
        self.places.insert(key(&place.name), place);
    }

    pub fn with_places<I: IntoIterator<Item = ResolvedPlace>>(places: I) -> Self {
        let mut gazetteer = Self::new();
        for place in places {
            gazetteer.insert(place);
        }
        gazetteer
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Place names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.places.values().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl PlaceResolver for Gazetteer {
    fn resolve(&self, place: &str) -> Result<ResolvedPlace, ResolutionError> {
        let found = self
            .places
            .get(&key(place))
            .ok_or_else(|| ResolutionError::PlaceNotFound {
                place: place.to_string(),
            })?;

        if parse_timezone(&found.timezone).is_err() {
            return Err(ResolutionError::TimezoneNotFound {
                place: found.name.clone(),
                timezone: found.timezone.clone(),
            });
        }
        Ok(found.clone())
    }
}

impl<R: PlaceResolver + ?Sized> PlaceResolver for &R {
    fn resolve(&self, place: &str) -> Result<ResolvedPlace, ResolutionError> {
        (**self).resolve(place)
    }
}
