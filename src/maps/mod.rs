//! Generic map types and helpers.
//!
//! This module provides [`Map`], a possibly-nil hash map augmented with
//! derived-view and in-place operations:
//!
//! - key, value and [`Entry`] extraction
//! - filtering by key, value or both, as a new map or in place
//! - merging, with either side winning key collisions
//! - shallow [`Map::copy`] and, for [`Cloneable`](crate::types::Cloneable)
//!   values, [`Map::deep_clone`]
//! - value search ([`Map::contains`], [`Map::find_key_of`]) for comparable values
//!
//! # Nil Maps
//!
//! A [`Map`] is either allocated or nil. Nil reads as empty and is carried
//! through derived views, but any write into it is rejected with
//! [`MapError::InvalidOperand`]:
//!
//! ```rust
//! use aki::maps::{Map, MapError};
//!
//! let nil: Map<&str, i32> = Map::nil();
//! assert!(nil.values().is_empty());
//! assert!(nil.filter(|_, _| true).is_nil());
//!
//! let other = Map::from([("a", 1)]);
//! assert_eq!(
//!     nil.try_merge(&other),
//!     Err(MapError::InvalidOperand { operation: "merge" })
//! );
//! ```
//!
//! # Hashers
//!
//! [`Map`] is generic over its [`BuildHasher`](std::hash::BuildHasher). With
//! the `fxhash` or `ahash` feature enabled, [`FxMap`] and [`AHashMap`] are
//! available as shorthands.

mod cloneable;
mod comparable;
mod entry;
mod error;
mod map;
mod predicate;

pub use entry::Entry;
pub use error::MapError;
pub use map::{IntoIter, Iter, Map};
pub use predicate::{KeyPredicate, Predicate, ValuePredicate};

/// A [`Map`] hashed with `rustc-hash`'s `FxHasher`.
#[cfg(feature = "fxhash")]
pub type FxMap<K, V> = Map<K, V, rustc_hash::FxBuildHasher>;

/// A [`Map`] hashed with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashMap<K, V> = Map<K, V, ahash::RandomState>;
