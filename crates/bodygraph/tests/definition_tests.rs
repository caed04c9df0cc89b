use bodygraph::definition::{
    canonical_channels, channel_centers, compute_definition, has_motor_to_throat, Center, Channel,
};
use proptest::collection::btree_set;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn gates(list: &[u8]) -> BTreeSet<u8> {
    list.iter().copied().collect()
}

#[test]
fn test_channel_lookup_symmetry() {
    for (channel, centers) in canonical_channels() {
        assert_eq!(channel_centers(channel.low, channel.high), Some(centers));
        assert_eq!(channel_centers(channel.high, channel.low), Some(centers));
    }
}

#[test]
fn test_g_to_throat_scenario() {
    let definition = compute_definition(&gates(&[1, 8]));
    assert_eq!(
        definition.channels,
        BTreeSet::from([Channel::new(1, 8)])
    );
    assert_eq!(definition.centers, BTreeSet::from([Center::G, Center::Throat]));
    assert!(!has_motor_to_throat(&definition.channels));
}

#[test]
fn test_sacral_to_throat_scenario() {
    let definition = compute_definition(&gates(&[3, 60, 20, 34]));
    for center in [Center::Sacral, Center::Root, Center::Throat] {
        assert!(definition.centers.contains(&center), "{center}");
    }
    assert!(has_motor_to_throat(&definition.channels));
}

#[test]
fn test_all_gates_define_everything() {
    let all: BTreeSet<u8> = (1..=64).collect();
    let definition = compute_definition(&all);
    assert_eq!(definition.channels.len(), 36);
    assert_eq!(definition.centers.len(), 9);
    assert!(definition.undefined_centers().is_empty());
}

proptest! {
    #[test]
    fn test_adding_a_gate_never_removes_definition(
        active in btree_set(1u8..=64, 0..20),
        extra in 1u8..=64,
    ) {
        let before = compute_definition(&active);
        let mut grown = active.clone();
        grown.insert(extra);
        let after = compute_definition(&grown);
        prop_assert!(before.channels.is_subset(&after.channels));
        prop_assert!(before.centers.is_subset(&after.centers));
    }

    #[test]
    fn test_defined_channels_have_both_gates(active in btree_set(1u8..=64, 0..30)) {
        let definition = compute_definition(&active);
        for channel in &definition.channels {
            prop_assert!(active.contains(&channel.low) && active.contains(&channel.high));
        }
    }
}
