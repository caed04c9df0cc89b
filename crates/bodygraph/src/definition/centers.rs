use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine energy centers of the bodygraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    /// Heart center.
    Ego,
    #[serde(rename = "Solar Plexus")]
    SolarPlexus,
    Sacral,
    Spleen,
    Root,
}

impl Center {
    pub const ALL: [Center; 9] = [
        Center::Head,
        Center::Ajna,
        Center::Throat,
        Center::G,
        Center::Ego,
        Center::SolarPlexus,
        Center::Sacral,
        Center::Spleen,
        Center::Root,
    ];

    /// Centers that can drive energy toward the Throat.
    pub const MOTORS: [Center; 4] = [
        Center::Sacral,
        Center::SolarPlexus,
        Center::Ego,
        Center::Root,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Center::Head => "Head",
            Center::Ajna => "Ajna",
            Center::Throat => "Throat",
            Center::G => "G",
            Center::Ego => "Ego",
            Center::SolarPlexus => "Solar Plexus",
            Center::Sacral => "Sacral",
            Center::Spleen => "Spleen",
            Center::Root => "Root",
        }
    }

    pub fn is_motor(self) -> bool {
        Self::MOTORS.contains(&self)
    }

    /// Gates whose home is this center, ascending.
    pub fn gates(self) -> Vec<u8> {
        (1..=64u8)
            .filter(|&gate| home_center(gate) == Some(self))
            .collect()
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Center {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "heart" => return Ok(Center::Ego),
            "solar_plexus" | "emotional" => return Ok(Center::SolarPlexus),
            _ => {}
        }
        Center::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown center: {}", s))
    }
}

// Home center of gates 1..=64, indexed by gate - 1
const GATE_CENTERS: [Center; 64] = {
    use Center::*;
    [
        G, G, Sacral, Ajna, Sacral, SolarPlexus, G, Throat, // 1-8
        Sacral, G, Ajna, Throat, G, Sacral, G, Throat, // 9-16
        Ajna, Spleen, Root, Throat, Ego, SolarPlexus, Throat, Ajna, // 17-24
        G, Ego, Sacral, Spleen, Sacral, SolarPlexus, Throat, Spleen, // 25-32
        Throat, Sacral, Throat, SolarPlexus, SolarPlexus, Root, Root, Ego, // 33-40
        Root, Sacral, Ajna, Spleen, Throat, G, Ajna, Spleen, // 41-48
        SolarPlexus, Spleen, Ego, Root, Root, Root, SolarPlexus, Throat, // 49-56
        Spleen, Root, Sacral, Root, Head, Throat, Head, Head, // 57-64
    ]
};

/// The center a gate belongs to.
pub fn home_center(gate: u8) -> Option<Center> {
    match gate {
        1..=64 => Some(GATE_CENTERS[(gate - 1) as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_gate_has_a_home() {
        let total: usize = Center::ALL.iter().map(|c| c.gates().len()).sum();
        assert_eq!(total, 64);
        assert_eq!(home_center(0), None);
        assert_eq!(home_center(65), None);
    }

    #[test]
    fn test_center_gate_counts() {
        assert_eq!(Center::Head.gates(), vec![61, 63, 64]);
        assert_eq!(Center::Ajna.gates().len(), 6);
        assert_eq!(Center::Throat.gates().len(), 11);
        assert_eq!(Center::G.gates().len(), 8);
        assert_eq!(Center::Ego.gates().len(), 4);
        assert_eq!(Center::SolarPlexus.gates().len(), 7);
        assert_eq!(Center::Sacral.gates().len(), 9);
        assert_eq!(Center::Spleen.gates().len(), 7);
        assert_eq!(Center::Root.gates().len(), 9);
    }

    #[test]
    fn test_motor_centers() {
        assert!(Center::Root.is_motor());
        assert!(Center::Ego.is_motor());
        assert!(!Center::Throat.is_motor());
        assert!(!Center::G.is_motor());
    }

    #[test]
    fn test_center_from_str_aliases() {
        assert_eq!("Heart".parse::<Center>(), Ok(Center::Ego));
        assert_eq!("solar plexus".parse::<Center>(), Ok(Center::SolarPlexus));
        assert_eq!("g".parse::<Center>(), Ok(Center::G));
        assert!("Crown".parse::<Center>().is_err());
    }

    #[test]
    fn test_center_serde_name() {
        let json = serde_json::to_string(&Center::SolarPlexus).unwrap();
        assert_eq!(json, "\"Solar Plexus\"");
    }
}
