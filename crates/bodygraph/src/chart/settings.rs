use crate::design::{DesignMethod, SolverParams};
use crate::ephemeris::ZodiacMode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when the ephemeris cannot resolve some bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    /// Omit the bodies and list them in `missing_bodies`.
    #[default]
    Lenient,
    /// Fail with `ChartError::IncompleteChart`.
    Strict,
}

impl FromStr for Completeness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(Completeness::Lenient),
            "strict" => Ok(Completeness::Strict),
            other => Err(format!("Unknown completeness policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub zodiac: ZodiacMode,
    pub design_method: DesignMethod,
    pub solver: SolverParams,
    pub completeness: Completeness,
}

impl ChartSettings {
    pub fn zodiac_label(&self) -> &'static str {
        self.zodiac.label()
    }

    /// `"-88° solar arc"` or `"-88 days"`.
    pub fn design_label(&self) -> String {
        match self.design_method {
            DesignMethod::SolarArc => format!("-{}° solar arc", self.solver.arc_degrees),
            DesignMethod::CalendarDays => format!("-{} days", self.solver.calendar_days),
        }
    }
}

/// Settings echoed into a chart result, with display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInfo {
    pub zodiac: ZodiacMode,
    pub zodiac_label: String,
    pub design_method: DesignMethod,
    pub design_label: String,
    pub completeness: Completeness,
}

impl From<&ChartSettings> for CalculationInfo {
    fn from(settings: &ChartSettings) -> Self {
        Self {
            zodiac: settings.zodiac,
            zodiac_label: settings.zodiac_label().to_string(),
            design_method: settings.design_method,
            design_label: settings.design_label(),
            completeness: settings.completeness,
        }
    }
}
