use crate::classify::types::{Authority, HdType, Profile, Strategy};
use crate::definition::{has_motor_to_throat, Center, Channel};
use crate::gates::gate_and_line;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Type, strategy and authority of a defined-center set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub hd_type: HdType,
    pub strategy: Strategy,
    pub authority: Authority,
    pub motor_to_throat: bool,
}

/// Classify a chart from its defined centers and channels.
pub fn classify(centers: &BTreeSet<Center>, channels: &BTreeSet<Channel>) -> Classification {
    let motor_to_throat = has_motor_to_throat(channels);
    let hd_type = determine_type(centers, motor_to_throat);
    Classification {
        hd_type,
        strategy: hd_type.strategy(),
        authority: determine_authority(centers, hd_type),
        motor_to_throat,
    }
}

/// First matching rule wins; Reflector is checked before everything else.
pub fn determine_type(centers: &BTreeSet<Center>, motor_to_throat: bool) -> HdType {
    if centers.is_empty() {
        return HdType::Reflector;
    }
    let sacral = centers.contains(&Center::Sacral);
    if sacral && motor_to_throat {
        return HdType::ManifestingGenerator;
    }
    if sacral {
        return HdType::Generator;
    }
    if centers.contains(&Center::Throat) && motor_to_throat {
        return HdType::Manifestor;
    }
    HdType::Projector
}

// Checked in order; the first defined center decides.
const AUTHORITY_ORDER: [(Center, Authority); 5] = [
    (Center::SolarPlexus, Authority::SolarPlexus),
    (Center::Sacral, Authority::Sacral),
    (Center::Spleen, Authority::Splenic),
    (Center::Ego, Authority::Ego),
    (Center::G, Authority::SelfProjected),
];

pub fn determine_authority(centers: &BTreeSet<Center>, hd_type: HdType) -> Authority {
    if let Some((_, authority)) = AUTHORITY_ORDER
        .iter()
        .find(|(center, _)| centers.contains(center))
    {
        return *authority;
    }
    match hd_type {
        HdType::Projector => Authority::Mental,
        HdType::Reflector => Authority::Lunar,
        _ => Authority::Unknown,
    }
}

/// Profile from the Personality and Design Sun longitudes.
pub fn compute_profile(personality_sun: Option<f64>, design_sun: Option<f64>) -> Profile {
    let line = |lon: Option<f64>| lon.and_then(gate_and_line).map(|gl| gl.line);
    Profile::new(line(personality_sun), line(design_sun))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centers(list: &[Center]) -> BTreeSet<Center> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_is_reflector() {
        let c = classify(&BTreeSet::new(), &BTreeSet::new());
        assert_eq!(c.hd_type, HdType::Reflector);
        assert_eq!(c.strategy, Strategy::ToWaitALunarCycle);
        assert_eq!(c.authority, Authority::Lunar);
    }

    #[test]
    fn test_type_table_order() {
        use Center::*;
        assert_eq!(determine_type(&centers(&[Sacral, Throat]), true), HdType::ManifestingGenerator);
        assert_eq!(determine_type(&centers(&[Sacral, Root]), false), HdType::Generator);
        assert_eq!(determine_type(&centers(&[Ego, Throat]), true), HdType::Manifestor);
        assert_eq!(determine_type(&centers(&[Ego, Throat]), false), HdType::Projector);
        assert_eq!(determine_type(&centers(&[Head, Ajna]), false), HdType::Projector);
    }

    #[test]
    fn test_authority_priority_short_circuits() {
        use Center::*;
        let all = centers(&Center::ALL);
        assert_eq!(determine_authority(&all, HdType::Generator), Authority::SolarPlexus);
        assert_eq!(
            determine_authority(&centers(&[Sacral, Spleen, Ego, G]), HdType::Generator),
            Authority::Sacral
        );
        assert_eq!(
            determine_authority(&centers(&[Spleen, Ego]), HdType::Projector),
            Authority::Splenic
        );
        assert_eq!(
            determine_authority(&centers(&[Ego, G]), HdType::Projector),
            Authority::Ego
        );
    }

    #[test]
    fn test_authority_fallbacks() {
        use Center::*;
        let mental = centers(&[Head, Ajna, Throat]);
        assert_eq!(determine_authority(&mental, HdType::Projector), Authority::Mental);
        assert_eq!(determine_authority(&BTreeSet::new(), HdType::Reflector), Authority::Lunar);
        assert_eq!(determine_authority(&mental, HdType::Manifestor), Authority::Unknown);
    }

    #[test]
    fn test_profile_from_sun_longitudes() {
        // 0° is line 2 of gate 25; 273° is line 6 of gate 10
        let profile = compute_profile(Some(0.0), Some(273.0));
        assert_eq!(profile.to_string(), "2/6");
        assert_eq!(compute_profile(None, Some(273.0)).to_string(), "—");
        assert_eq!(compute_profile(Some(f64::NAN), Some(273.0)).to_string(), "—");
    }
}
