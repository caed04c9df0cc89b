use crate::chart::result::MissingBody;
use crate::ephemeris::EphemerisError;
use crate::geo::ResolutionError;
use thiserror::Error;

/// Errors that abort a chart computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid birth {field} {value:?}: {message}")]
    InvalidBirthInput {
        field: &'static str,
        value: String,
        message: String,
    },
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Chart is incomplete: {} bodies could not be computed", .missing.len())]
    IncompleteChart { missing: Vec<MissingBody> },
}
