use crate::definition::centers::Center;
use crate::definition::channels::{canonical_channels, Channel};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Channels fully activated by a gate set and the centers they define.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub channels: BTreeSet<Channel>,
    pub centers: BTreeSet<Center>,
}

impl Definition {
    /// Centers not touched by any defined channel.
    pub fn undefined_centers(&self) -> BTreeSet<Center> {
        Center::ALL
            .iter()
            .copied()
            .filter(|c| !self.centers.contains(c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

/// Single pass over the channel table: a channel is defined only when both
/// of its gates are active.
pub fn compute_definition(active_gates: &BTreeSet<u8>) -> Definition {
    let mut definition = Definition::default();
    for (channel, (c1, c2)) in canonical_channels() {
        if active_gates.contains(&channel.low) && active_gates.contains(&channel.high) {
            definition.channels.insert(channel);
            definition.centers.insert(c1);
            definition.centers.insert(c2);
        }
    }
    definition
}

/// Undirected adjacency between centers, one edge per defined channel.
pub fn build_center_graph(channels: &BTreeSet<Channel>) -> BTreeMap<Center, BTreeSet<Center>> {
    let mut graph: BTreeMap<Center, BTreeSet<Center>> = BTreeMap::new();
    for channel in channels {
        if let Some((c1, c2)) = channel.centers() {
            graph.entry(c1).or_default().insert(c2);
            graph.entry(c2).or_default().insert(c1);
        }
    }
    graph
}

/// Whether any motor center reaches the Throat through defined channels.
pub fn has_motor_to_throat(channels: &BTreeSet<Channel>) -> bool {
    let graph = build_center_graph(channels);

    for start in Center::MOTORS {
        if !graph.contains_key(&start) {
            continue;
        }
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(center) = queue.pop_front() {
            if center == Center::Throat {
                return true;
            }
            for &next in graph.get(&center).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gates(list: &[u8]) -> BTreeSet<u8> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_partial_channel_defines_nothing() {
        let definition = compute_definition(&gates(&[1, 2, 3]));
        assert!(definition.channels.is_empty());
        assert!(definition.is_empty());
        assert_eq!(definition.undefined_centers().len(), 9);
    }

    #[test]
    fn test_direct_motor_to_throat() {
        let definition = compute_definition(&gates(&[21, 45]));
        assert!(has_motor_to_throat(&definition.channels));
    }

    #[test]
    fn test_indirect_motor_to_throat() {
        // Root -> Spleen -> Throat
        let definition = compute_definition(&gates(&[18, 58, 16, 48]));
        assert!(has_motor_to_throat(&definition.channels));
    }

    #[test]
    fn test_motor_without_path() {
        // Sacral-Root and G-Throat, not connected to each other
        let definition = compute_definition(&gates(&[3, 60, 1, 8]));
        assert_eq!(definition.channels.len(), 2);
        assert!(!has_motor_to_throat(&definition.channels));
    }

    #[test]
    fn test_empty_graph() {
        assert!(build_center_graph(&BTreeSet::new()).is_empty());
        assert!(!has_motor_to_throat(&BTreeSet::new()));
    }
}
