//! Property-based tests for prop snapshot merging using proptest.

use brook_core::Props;
use proptest::prelude::*;

fn props_from(pairs: &[(String, i64)]) -> Props {
    let mut props = Props::new();
    for (k, v) in pairs {
        props.insert(k.clone(), *v);
    }
    props
}

proptest! {
    /// Every overlay key wins in the merged snapshot.
    #[test]
    fn overlay_keys_take_precedence(
        base in prop::collection::vec(("[a-e]", -100i64..100), 0..10),
        overlay in prop::collection::vec(("[a-e]", -100i64..100), 0..10),
    ) {
        let base = props_from(&base);
        let overlay = props_from(&overlay);
        let merged = base.merged(&overlay);

        for (key, value) in overlay.iter() {
            prop_assert_eq!(merged.get(key), Some(value), "overlay key {} must win", key);
        }
    }

    /// Base keys absent from the overlay survive unchanged.
    #[test]
    fn base_keys_survive_merge(
        base in prop::collection::vec(("[a-e]", -100i64..100), 0..10),
        overlay in prop::collection::vec(("[f-j]", -100i64..100), 0..10),
    ) {
        let base = props_from(&base);
        let overlay = props_from(&overlay);
        let merged = base.merged(&overlay);

        // Disjoint key ranges: every base entry must come through untouched.
        for (key, value) in base.iter() {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        prop_assert_eq!(merged.len(), base.len() + overlay.len());
    }

    /// Merged key set is the union of both inputs, base order first.
    #[test]
    fn merged_key_order_is_stable(
        base in prop::collection::vec(("[a-e]", -100i64..100), 0..10),
        overlay in prop::collection::vec(("[c-h]", -100i64..100), 0..10),
    ) {
        let base = props_from(&base);
        let overlay = props_from(&overlay);
        let merged = base.merged(&overlay);

        let base_keys: Vec<&str> = base.keys().collect();
        let merged_keys: Vec<&str> = merged.keys().collect();

        // Base keys keep their positions at the front.
        prop_assert_eq!(&merged_keys[..base_keys.len()], &base_keys[..]);

        // Union size, no duplicates.
        let mut expected = base_keys.len();
        for key in overlay.keys() {
            if !base.contains_key(key) {
                expected += 1;
            }
        }
        prop_assert_eq!(merged.len(), expected);
    }

    /// Merging twice with the same overlay is idempotent.
    #[test]
    fn merge_is_idempotent(
        base in prop::collection::vec(("[a-e]", -100i64..100), 0..10),
        overlay in prop::collection::vec(("[a-h]", -100i64..100), 0..10),
    ) {
        let base = props_from(&base);
        let overlay = props_from(&overlay);

        let once = base.merged(&overlay);
        let twice = once.merged(&overlay);
        prop_assert_eq!(once, twice);
    }

    /// Insert replaces in place without growing the snapshot.
    #[test]
    fn insert_replace_keeps_len(
        pairs in prop::collection::vec(("[a-c]", -100i64..100), 1..20),
    ) {
        let props = props_from(&pairs);
        // At most three distinct keys by construction.
        prop_assert!(props.len() <= 3);
        for (k, _) in &pairs {
            prop_assert!(props.contains_key(k));
        }
    }
}
