pub mod angles;
pub mod chart;
pub mod classify;
pub mod definition;
pub mod design;
pub mod ephemeris;
pub mod gates;
pub mod geo;

pub use chart::{
    Activation, BirthInput, CalculationInfo, ChartAssembler, ChartError, ChartResult,
    ChartSettings, Completeness, MissingBody, Side,
};
pub use classify::{Authority, HdType, Profile, Strategy};
pub use definition::{Center, Channel, Definition};
pub use design::{DesignMethod, DesignSolution, SolverParams};
pub use ephemeris::{Body, Ephemeris, EphemerisError, SwissEphemerisAdapter, ZodiacMode};
pub use gates::{gate_and_line, GateLine, GateRange};
pub use geo::{Gazetteer, PlaceResolver, ResolutionError, ResolvedPlace};
