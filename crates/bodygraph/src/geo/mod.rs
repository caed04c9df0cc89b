pub mod resolver;
pub mod timezone;

pub use resolver::{Gazetteer, PlaceResolver, ResolutionError, ResolvedPlace};
pub use timezone::{parse_timezone, to_utc};
