pub mod assembler;
pub mod error;
pub mod input;
pub mod result;
pub mod settings;

pub use assembler::ChartAssembler;
pub use error::ChartError;
pub use input::{parse_date, parse_time, BirthInput};
pub use result::{Activation, ChartResult, MissingBody, Side};
pub use settings::{CalculationInfo, ChartSettings, Completeness};
