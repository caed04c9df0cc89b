use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder shown when a profile line cannot be resolved.
pub const PROFILE_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdType {
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

impl HdType {
    pub fn name(self) -> &'static str {
        match self {
            HdType::Generator => "Generator",
            HdType::ManifestingGenerator => "Manifesting Generator",
            HdType::Manifestor => "Manifestor",
            HdType::Projector => "Projector",
            HdType::Reflector => "Reflector",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            HdType::Generator | HdType::ManifestingGenerator => Strategy::ToRespond,
            HdType::Manifestor => Strategy::ToInform,
            HdType::Projector => Strategy::ToWaitForInvitation,
            HdType::Reflector => Strategy::ToWaitALunarCycle,
        }
    }
}

impl fmt::Display for HdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "To Respond")]
    ToRespond,
    #[serde(rename = "To Inform")]
    ToInform,
    #[serde(rename = "To Wait for Invitation")]
    ToWaitForInvitation,
    #[serde(rename = "To Wait a Lunar Cycle")]
    ToWaitALunarCycle,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::ToRespond => "To Respond",
            Strategy::ToInform => "To Inform",
            Strategy::ToWaitForInvitation => "To Wait for Invitation",
            Strategy::ToWaitALunarCycle => "To Wait a Lunar Cycle",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    #[serde(rename = "Solar Plexus")]
    SolarPlexus,
    Sacral,
    Splenic,
    Ego,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    Mental,
    Lunar,
    Unknown,
}

impl Authority {
    pub fn as_str(self) -> &'static str {
        match self {
            Authority::SolarPlexus => "Solar Plexus",
            Authority::Sacral => "Sacral",
            Authority::Splenic => "Splenic",
            Authority::Ego => "Ego",
            Authority::SelfProjected => "Self-Projected",
            Authority::Mental => "Mental",
            Authority::Lunar => "Lunar",
            Authority::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personality Sun line over Design Sun line, e.g. `"3/5"`.
///
/// Serialized as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Profile {
    pub personality_line: Option<u8>,
    pub design_line: Option<u8>,
}

impl Profile {
    pub fn new(personality_line: Option<u8>, design_line: Option<u8>) -> Self {
        Self {
            personality_line,
            design_line,
        }
    }

    /// Both lines known and within 1..=6.
    pub fn is_resolved(&self) -> bool {
        let valid = |line: Option<u8>| matches!(line, Some(1..=6));
        valid(self.personality_line) && valid(self.design_line)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.personality_line, self.design_line) {
            (Some(p), Some(d)) if self.is_resolved() => write!(f, "{}/{}", p, d),
            _ => f.write_str(PROFILE_PLACEHOLDER),
        }
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.to_string()
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == PROFILE_PLACEHOLDER {
            return Ok(Profile::new(None, None));
        }
        let (p, d) = s
            .split_once('/')
            .ok_or_else(|| format!("Invalid profile: {}", s))?;
        let parse_line = |part: &str| -> Result<u8, String> {
            match part.trim().parse::<u8>() {
                Ok(line @ 1..=6) => Ok(line),
                _ => Err(format!("Invalid profile line {:?} in {}", part, s)),
            }
        };
        Ok(Profile::new(Some(parse_line(p)?), Some(parse_line(d)?)))
    }
}

impl TryFrom<String> for Profile {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_per_type() {
        assert_eq!(HdType::Generator.strategy(), Strategy::ToRespond);
        assert_eq!(HdType::ManifestingGenerator.strategy(), Strategy::ToRespond);
        assert_eq!(HdType::Manifestor.strategy().as_str(), "To Inform");
        assert_eq!(HdType::Projector.strategy().as_str(), "To Wait for Invitation");
        assert_eq!(HdType::Reflector.strategy().as_str(), "To Wait a Lunar Cycle");
    }

    #[test]
    fn test_profile_display() {
        assert_eq!(Profile::new(Some(3), Some(5)).to_string(), "3/5");
        assert_eq!(Profile::new(Some(3), None).to_string(), "—");
        assert_eq!(Profile::new(Some(0), Some(5)).to_string(), "—");
    }

    #[test]
    fn test_profile_serde_as_string() {
        let json = serde_json::to_string(&Profile::new(Some(6), Some(2))).unwrap();
        assert_eq!(json, "\"6/2\"");
        let back: Profile = serde_json::from_str("\"—\"").unwrap();
        assert!(!back.is_resolved());
        assert!(serde_json::from_str::<Profile>("\"7/2\"").is_err());
    }

    #[test]
    fn test_type_serde_name() {
        let json = serde_json::to_string(&HdType::ManifestingGenerator).unwrap();
        assert_eq!(json, "\"Manifesting Generator\"");
    }
}
