//! Predicate types used to drive filtering.
//!
//! Filtering methods accept any closure of the matching shape. The aliases in
//! this module exist for the cases where a predicate has to be named or
//! stored, e.g. in a table of filters chosen at runtime.
//!
//! ```rust
//! use aki::maps::{Map, Predicate};
//!
//! let filters: Vec<Predicate<'_, &str, i32>> = vec![
//!     Box::new(|_, value| *value > 1),
//!     Box::new(|key, _| key.starts_with('a')),
//! ];
//!
//! let map = Map::from([("a", 1), ("b", 2), ("ab", 3)]);
//! let sizes: Vec<usize> = filters.iter().map(|filter| map.filter(filter).len()).collect();
//! assert_eq!(sizes, vec![2, 2]);
//! ```

/// A predicate over both the key and the value of an association.
pub type Predicate<'a, K, V> = Box<dyn Fn(&K, &V) -> bool + 'a>;

/// A predicate over the key of an association.
pub type KeyPredicate<'a, K> = Box<dyn Fn(&K) -> bool + 'a>;

/// A predicate over the value of an association.
pub type ValuePredicate<'a, V> = Box<dyn Fn(&V) -> bool + 'a>;
