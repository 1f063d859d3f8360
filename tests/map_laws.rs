#![cfg(feature = "maps")]
//! Property-based tests for `Map`.
//!
//! This module verifies the laws the map operations satisfy:
//!
//! - keys and values have equal length and zip back into the entries
//! - filtering with `true` is a copy, filtering with `false` empties
//! - `from_entries(entries(m)) == m`
//! - merging with an empty map is a copy
//! - the collision policy of `merge` and `merge_left`

use aki::maps::{Entry, Map};
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,10}".prop_map(|s| s)
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn arbitrary_map() -> impl Strategy<Value = Map<String, i32>> {
    prop::collection::hash_map(arbitrary_key(), arbitrary_value(), 0..50).prop_map(Map::from)
}

fn arbitrary_possibly_nil_map() -> impl Strategy<Value = Map<String, i32>> {
    prop_oneof![
        1 => Just(Map::nil()),
        4 => arbitrary_map(),
    ]
}

// =============================================================================
// Keys, Values, Entries
// =============================================================================

proptest! {
    /// Keys and values have the map's length and zip back into its entries.
    #[test]
    fn prop_keys_values_zip_into_entries(map in arbitrary_possibly_nil_map()) {
        let keys = map.keys();
        let values = map.values();
        prop_assert_eq!(keys.len(), values.len());
        prop_assert_eq!(keys.len(), map.len());

        let zipped: HashMap<String, i32> = keys.into_iter().zip(values).collect();
        let entries: HashMap<String, i32> = map.entries().into_iter().map(Entry::into_pair).collect();
        prop_assert_eq!(zipped, entries);
    }
}

proptest! {
    /// Rebuilding a map from its entries gives the same map.
    #[test]
    fn prop_from_entries_round_trip(map in arbitrary_map()) {
        prop_assert_eq!(Map::from_entries(map.entries()), map);
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// Accepting every entry is the same as copying.
    #[test]
    fn prop_filter_true_is_copy(map in arbitrary_possibly_nil_map()) {
        prop_assert_eq!(map.filter(|_, _| true), map.copy());
    }
}

proptest! {
    /// Rejecting every entry empties the map without changing nil-ness.
    #[test]
    fn prop_filter_false_empties(map in arbitrary_possibly_nil_map()) {
        let filtered = map.filter(|_, _| false);
        prop_assert!(filtered.is_empty());
        prop_assert_eq!(filtered.is_nil(), map.is_nil());
    }
}

proptest! {
    /// In-place filtering agrees with the derived filter.
    #[test]
    fn prop_filter_self_matches_filter(map in arbitrary_map(), threshold in arbitrary_value()) {
        let expected = map.filter_by_value(|value| *value < threshold);

        let mut in_place = map.copy();
        in_place.filter_self_by_value(|value| *value < threshold);

        prop_assert_eq!(in_place, expected);
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Merging in an empty or nil map is a copy.
    #[test]
    fn prop_merge_with_empty_is_copy(map in arbitrary_map()) {
        prop_assert_eq!(map.merge(&Map::new()), map.copy());
        prop_assert_eq!(map.merge(&Map::nil()), map.copy());
    }
}

proptest! {
    /// Merging into an empty map yields the other map.
    #[test]
    fn prop_empty_merge_is_other(map in arbitrary_map()) {
        prop_assert_eq!(Map::new().merge(&map), map.clone());
        prop_assert_eq!(Map::new().merge_left(&map), map);
    }
}

proptest! {
    /// `merge` takes the other value on collisions, `merge_left` keeps the receiver's.
    #[test]
    fn prop_merge_collision_policy(this in arbitrary_map(), other in arbitrary_map()) {
        let merged = this.merge(&other);
        let merged_left = this.merge_left(&other);

        for (key, value) in &other {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &this {
            prop_assert_eq!(merged_left.get(key), Some(value));
        }
        for key in this.keys().iter().chain(other.keys().iter()) {
            prop_assert!(merged.contains_key(key));
            prop_assert!(merged_left.contains_key(key));
        }
        prop_assert_eq!(merged.len(), merged_left.len());
    }
}

proptest! {
    /// In-place merges agree with their derived counterparts.
    #[test]
    fn prop_merge_self_matches_merge(this in arbitrary_map(), other in arbitrary_map()) {
        let mut in_place = this.copy();
        in_place.merge_self(&other);
        prop_assert_eq!(in_place, this.merge(&other));

        let mut in_place_left = this.copy();
        in_place_left.merge_self_left(&other);
        prop_assert_eq!(in_place_left, this.merge_left(&other));
    }
}

// =============================================================================
// Comparable Laws
// =============================================================================

proptest! {
    /// A found key maps to the searched value; no key means no such value.
    #[test]
    fn prop_find_key_of_points_at_value(map in arbitrary_map(), value in arbitrary_value()) {
        match map.find_key_of(&value) {
            Some(key) => prop_assert_eq!(map.get(key), Some(&value)),
            None => prop_assert!(!map.contains(&value)),
        }
    }
}
