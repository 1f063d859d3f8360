//! Generic map with derived-view and in-place operations.
//!
//! This module provides [`Map`], a thin layer over [`HashMap`] that can also
//! be *nil*: a map that was never allocated. A nil map reads as empty, is
//! propagated by derived views ([`Map::filter`], [`Map::copy`]) and refuses
//! writes, which surface as [`MapError::InvalidOperand`].
//!
//! # Derived views and in-place operations
//!
//! Every operation comes in two flavours:
//!
//! - derived views (`filter`, `copy`, `merge`, ...) take `&self` and return a
//!   new map that never shares storage with the receiver
//! - in-place operations (`filter_self`, `merge_self`, `fill_entries`, ...)
//!   take `&mut self`, avoid the allocation and return the receiver for chaining
//!
//! # Examples
//!
//! ```rust
//! use aki::maps::Map;
//!
//! let prices = Map::from([("apple", 3), ("pear", 5), ("plum", 2)]);
//!
//! let cheap = prices.filter_by_value(|price| *price < 4);
//! assert_eq!(cheap, Map::from([("apple", 3), ("plum", 2)]));
//!
//! // The receiver is untouched by derived views
//! assert_eq!(prices.len(), 3);
//!
//! let mut stock = prices.copy();
//! stock
//!     .filter_self_by_key(|name| name.starts_with('p'))
//!     .merge_self(&Map::from([("kiwi", 7)]));
//! assert_eq!(stock, Map::from([("pear", 5), ("plum", 2), ("kiwi", 7)]));
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::{self, RandomState};
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::entry::Entry;
use super::error::MapError;

// =============================================================================
// Map Definition
// =============================================================================

/// A generic map from unique keys to values, which may be nil.
///
/// A nil map is distinct from an empty one: it behaves as empty for reads,
/// derived views of it are nil again, and writing into it fails.
///
/// # Examples
///
/// ```rust
/// use aki::maps::Map;
///
/// let nil: Map<i32, i32> = Map::nil();
/// assert!(nil.is_nil());
/// assert!(nil.keys().is_empty());
///
/// let empty: Map<i32, i32> = Map::new();
/// assert!(!empty.is_nil());
/// assert_ne!(nil, empty);
/// ```
#[derive(Clone)]
pub struct Map<K, V, S = RandomState> {
    inner: Option<HashMap<K, V, S>>,
}

static_assertions::assert_impl_all!(Map<String, i32>: Send, Sync, Clone, Default);

impl<K, V> Map<K, V, RandomState> {
    /// Creates an allocated, empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map: Map<String, i32> = Map::new();
    /// assert!(map.is_empty());
    /// assert!(!map.is_nil());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from(HashMap::new())
    }

    /// Creates an allocated, empty map with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(HashMap::with_capacity(capacity))
    }
}

impl<K, V, S> Map<K, V, S> {
    /// Creates a nil map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map: Map<&str, i32> = Map::nil();
    /// assert!(map.is_nil());
    /// assert_eq!(map.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self { inner: None }
    }

    /// Creates an allocated, empty map using `hasher` to hash keys.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::from(HashMap::with_hasher(hasher))
    }

    /// Creates an allocated, empty map with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from(HashMap::with_capacity_and_hasher(capacity, hasher))
    }

    /// Returns `true` if the map was never allocated.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the number of entries. A nil map has none.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, HashMap::len)
    }

    /// Returns `true` if the map holds no entries, which includes the nil map.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the underlying [`HashMap`], or `None` for a nil map.
    #[inline]
    #[must_use]
    pub const fn as_inner(&self) -> Option<&HashMap<K, V, S>> {
        self.inner.as_ref()
    }

    /// Consumes the map, returning the underlying [`HashMap`] if allocated.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Option<HashMap<K, V, S>> {
        self.inner
    }

    /// Returns an iterator over key-value pairs in no defined order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([("a", 1), ("b", 2)]);
    /// let sum: i32 = map.iter().map(|(_, value)| value).sum();
    /// assert_eq!(sum, 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.inner.as_ref().map(HashMap::iter),
        }
    }

    /// Returns the keys of the map in no defined order.
    ///
    /// A nil map yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([(1, 'a'), (2, 'b')]);
    /// let mut keys = map.keys();
    /// keys.sort_unstable();
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns the values of the map in no defined order.
    ///
    /// For an unchanged map the order matches [`Map::keys`].
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns one [`Entry`] per association, in no defined order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::{Entry, Map};
    ///
    /// let map = Map::from([("key", 42)]);
    /// assert_eq!(map.entries(), vec![Entry::new("key", 42)]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }

    /// Consumes the map, returning its entries without cloning them.
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry<K, V>> {
        self.into_iter().map(Entry::from).collect()
    }

    /// Returns a shallow copy of the map.
    ///
    /// The copy owns a new backing table; values are cloned with their own
    /// [`Clone`] implementation. A nil map copies to a nil map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([(1, 2.0)]);
    /// let mut copy = map.copy();
    /// copy.insert(3, 4.0);
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(copy.len(), 2);
    /// assert!(Map::<i32, f64>::nil().copy().is_nil());
    /// ```
    #[must_use]
    pub fn copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        self.clone()
    }
}

// =============================================================================
// Lookups and In-Place Operations
// =============================================================================

impl<K, V, S> Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Builds an allocated map from entries. Later duplicates overwrite earlier ones.
    ///
    /// The result is never nil, even for zero entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::{Entry, Map};
    ///
    /// let map: Map<i32, i32> = Map::from_entries([Entry::new(1, 2), Entry::new(1, 3)]);
    /// assert_eq!(map, Map::from([(1, 3)]));
    ///
    /// let empty: Map<i32, i32> = Map::from_entries(std::iter::empty());
    /// assert!(!empty.is_nil());
    /// ```
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<K, V>>,
        S: Default,
    {
        entries.into_iter().collect()
    }

    /// Builds an allocated map holding a single entry.
    #[must_use]
    pub fn from_entry(entry: Entry<K, V>) -> Self
    where
        S: Default,
    {
        Self::from_entries(std::iter::once(entry))
    }

    /// Returns a reference to the value stored for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.as_ref()?.get(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.as_mut()?.get_mut(key)
    }

    /// Returns `true` if the map holds `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([("a".to_string(), 1)]);
    /// assert!(map.contains_key("a"));
    /// assert!(!map.contains_key("b"));
    /// ```
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.as_ref().is_some_and(|map| map.contains_key(key))
    }

    /// Inserts an association, returning the value previously stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the map is nil.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        let map = self
            .inner
            .as_mut()
            .ok_or_else(|| MapError::invalid_operand("insert"))?;
        Ok(map.insert(key, value))
    }

    /// Inserts an association, returning the value previously stored for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the map is nil.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        or_panic(self.try_insert(key, value))
    }

    /// Removes `key`, returning its value. Removing from a nil map is a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.as_mut()?.remove(key)
    }

    /// Removes every association for which `predicate` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the map is nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let mut map = Map::from([(1, 2), (3, 4), (5, 6)]);
    /// map.try_filter_self(|key, value| *key == 1 || *value == 4).unwrap();
    /// assert_eq!(map, Map::from([(1, 2), (3, 4)]));
    ///
    /// assert!(Map::<i32, i32>::nil().try_filter_self(|_, _| true).is_err());
    /// ```
    pub fn try_filter_self<P>(&mut self, mut predicate: P) -> Result<&mut Self, MapError>
    where
        P: FnMut(&K, &V) -> bool,
    {
        let map = self
            .inner
            .as_mut()
            .ok_or_else(|| MapError::invalid_operand("filter_self"))?;
        map.retain(|key, value| predicate(key, &*value));
        Ok(self)
    }

    /// Removes every association for which `predicate` returns `false`.
    ///
    /// # Panics
    ///
    /// Panics if the map is nil.
    pub fn filter_self<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        or_panic(self.try_filter_self(predicate))
    }

    /// Removes every association whose key fails `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the map is nil.
    pub fn try_filter_self_by_key<P>(&mut self, mut predicate: P) -> Result<&mut Self, MapError>
    where
        P: FnMut(&K) -> bool,
    {
        self.try_filter_self(|key, _| predicate(key))
    }

    /// Removes every association whose key fails `predicate`.
    ///
    /// # Panics
    ///
    /// Panics if the map is nil.
    pub fn filter_self_by_key<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&K) -> bool,
    {
        or_panic(self.try_filter_self_by_key(predicate))
    }

    /// Removes every association whose value fails `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the map is nil.
    pub fn try_filter_self_by_value<P>(&mut self, mut predicate: P) -> Result<&mut Self, MapError>
    where
        P: FnMut(&V) -> bool,
    {
        self.try_filter_self(|_, value| predicate(value))
    }

    /// Removes every association whose value fails `predicate`.
    ///
    /// # Panics
    ///
    /// Panics if the map is nil.
    pub fn filter_self_by_value<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&V) -> bool,
    {
        or_panic(self.try_filter_self_by_value(predicate))
    }

    /// Inserts every entry into the map. Later duplicates overwrite earlier ones.
    ///
    /// Filling a nil map with no entries is a no-op and leaves it nil.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the map is nil and at least one
    /// entry was supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::{Entry, Map};
    ///
    /// let mut map = Map::from([(1, 1)]);
    /// map.try_fill_entries([Entry::new(1, 2), Entry::new(1, 3)]).unwrap();
    /// assert_eq!(map.get(&1), Some(&3));
    /// ```
    pub fn try_fill_entries<I>(&mut self, entries: I) -> Result<&mut Self, MapError>
    where
        I: IntoIterator<Item = Entry<K, V>>,
    {
        let mut entries = entries.into_iter().peekable();
        match self.inner.as_mut() {
            Some(map) => map.extend(entries.map(Entry::into_pair)),
            None if entries.peek().is_some() => {
                return Err(MapError::invalid_operand("fill_entries"));
            }
            None => {}
        }
        Ok(self)
    }

    /// Inserts every entry into the map. Later duplicates overwrite earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if the map is nil and at least one entry was supplied.
    pub fn fill_entries<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = Entry<K, V>>,
    {
        or_panic(self.try_fill_entries(entries))
    }

    /// Inserts a single entry into the map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the map is nil.
    pub fn try_fill_entry(&mut self, entry: Entry<K, V>) -> Result<&mut Self, MapError> {
        self.try_fill_entries(std::iter::once(entry))
    }

    /// Inserts a single entry into the map.
    ///
    /// # Panics
    ///
    /// Panics if the map is nil.
    pub fn fill_entry(&mut self, entry: Entry<K, V>) -> &mut Self {
        or_panic(self.try_fill_entry(entry))
    }
}

// =============================================================================
// Derived Views and Merging
// =============================================================================

impl<K, V, S> Map<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new map holding the associations for which `predicate` returns `true`.
    ///
    /// The receiver is not modified. A nil map filters to a nil map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([(1, 2.0), (3, 4.0), (5, 6.0)]);
    /// let filtered = map.filter(|key, value| *key == 1 || *value == 4.0);
    /// assert_eq!(filtered, Map::from([(1, 2.0), (3, 4.0)]));
    ///
    /// let nil: Map<i32, f64> = Map::nil();
    /// assert!(nil.filter(|_, _| true).is_nil());
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        let inner = self.inner.as_ref().map(|map| {
            let mut filtered = HashMap::with_hasher(map.hasher().clone());
            filtered.extend(
                map.iter()
                    .filter(|&(key, value)| predicate(key, value))
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
            filtered
        });
        Self { inner }
    }

    /// Returns a new map holding the associations whose key passes `predicate`.
    #[must_use]
    pub fn filter_by_key<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K) -> bool,
    {
        self.filter(|key, _| predicate(key))
    }

    /// Returns a new map holding the associations whose value passes `predicate`.
    #[must_use]
    pub fn filter_by_value<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.filter(|_, value| predicate(value))
    }

    /// Returns a copy of the receiver with every association of `other` applied
    /// on top. On a key collision the value from `other` wins.
    ///
    /// | receiver | other     | result                |
    /// |----------|-----------|-----------------------|
    /// | nil      | nil/empty | nil                   |
    /// | nil      | non-empty | `InvalidOperand`      |
    /// | non-nil  | any       | copy with `other` on top |
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the receiver is nil and `other`
    /// is not empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let this = Map::from([(1, 2.0)]);
    /// let other = Map::from([(1, 5.0), (3, 4.0)]);
    /// assert_eq!(this.try_merge(&other), Ok(Map::from([(1, 5.0), (3, 4.0)])));
    ///
    /// let nil: Map<i32, f64> = Map::nil();
    /// assert!(nil.try_merge(&other).is_err());
    /// ```
    pub fn try_merge(&self, other: &Self) -> Result<Self, MapError> {
        let mut merged = self.copy();
        merged.write_from(other, "merge", Collision::TakeOther)?;
        Ok(merged)
    }

    /// Returns a copy of the receiver with every association of `other` applied
    /// on top. On a key collision the value from `other` wins.
    ///
    /// # Panics
    ///
    /// Panics if the receiver is nil and `other` is not empty.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        or_panic(self.try_merge(other))
    }

    /// Returns a copy of the receiver extended with the associations of `other`
    /// whose keys the receiver lacks. On a key collision the receiver's value wins.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the receiver is nil and `other`
    /// is not empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let this = Map::from([(1, 2.0)]);
    /// let other = Map::from([(1, 5.0), (3, 4.0)]);
    /// assert_eq!(this.try_merge_left(&other), Ok(Map::from([(1, 2.0), (3, 4.0)])));
    /// ```
    pub fn try_merge_left(&self, other: &Self) -> Result<Self, MapError> {
        let mut merged = self.copy();
        merged.write_from(other, "merge_left", Collision::KeepReceiver)?;
        Ok(merged)
    }

    /// Returns a copy of the receiver extended with the associations of `other`
    /// whose keys the receiver lacks.
    ///
    /// # Panics
    ///
    /// Panics if the receiver is nil and `other` is not empty.
    #[must_use]
    pub fn merge_left(&self, other: &Self) -> Self {
        or_panic(self.try_merge_left(other))
    }

    /// Applies every association of `other` to the receiver in place. On a key
    /// collision the value from `other` wins.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the receiver is nil and `other`
    /// is not empty.
    pub fn try_merge_self(&mut self, other: &Self) -> Result<&mut Self, MapError> {
        self.write_from(other, "merge_self", Collision::TakeOther)?;
        Ok(self)
    }

    /// Applies every association of `other` to the receiver in place. On a key
    /// collision the value from `other` wins.
    ///
    /// # Panics
    ///
    /// Panics if the receiver is nil and `other` is not empty.
    pub fn merge_self(&mut self, other: &Self) -> &mut Self {
        or_panic(self.try_merge_self(other))
    }

    /// Inserts the associations of `other` whose keys the receiver lacks.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidOperand`] if the receiver is nil and `other`
    /// is not empty.
    pub fn try_merge_self_left(&mut self, other: &Self) -> Result<&mut Self, MapError> {
        self.write_from(other, "merge_self_left", Collision::KeepReceiver)?;
        Ok(self)
    }

    /// Inserts the associations of `other` whose keys the receiver lacks.
    ///
    /// # Panics
    ///
    /// Panics if the receiver is nil and `other` is not empty.
    pub fn merge_self_left(&mut self, other: &Self) -> &mut Self {
        or_panic(self.try_merge_self_left(other))
    }

    fn write_from(
        &mut self,
        other: &Self,
        operation: &'static str,
        collision: Collision,
    ) -> Result<(), MapError> {
        let Some(source) = other.inner.as_ref().filter(|source| !source.is_empty()) else {
            return Ok(());
        };
        let target = self
            .inner
            .as_mut()
            .ok_or_else(|| MapError::invalid_operand(operation))?;

        for (key, value) in source {
            if collision == Collision::KeepReceiver && target.contains_key(key) {
                continue;
            }
            target.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

/// Which side wins when both maps of a merge hold the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collision {
    TakeOther,
    KeepReceiver,
}

fn or_panic<T>(result: Result<T, MapError>) -> T {
    result.unwrap_or_else(|error| panic!("{error}"))
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of a [`Map`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: Option<hash_map::Iter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over key-value pairs of a [`Map`].
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: Option<hash_map::IntoIter<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// The default map is nil, the zero value of a map.
impl<K, V, S> Default for Map<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Map<K, V, S> {
    #[inline]
    fn from(map: HashMap<K, V, S>) -> Self {
        Self { inner: Some(map) }
    }
}

impl<K, V, S> From<Option<HashMap<K, V, S>>> for Map<K, V, S> {
    #[inline]
    fn from(inner: Option<HashMap<K, V, S>>) -> Self {
        Self { inner }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for Map<K, V, RandomState> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from(HashMap::from(entries))
    }
}

impl<K, V, S> FromIterator<(K, V)> for Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<K, V, S>>())
    }
}

impl<K, V, S> FromIterator<Entry<K, V>> for Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        iter.into_iter().map(Entry::into_pair).collect()
    }
}

/// Extending a nil map with at least one pair panics, like [`Map::fill_entries`].
impl<K, V, S> Extend<(K, V)> for Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fill_entries(iter.into_iter().map(Entry::from));
    }
}

impl<K, V, S> Extend<Entry<K, V>> for Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = Entry<K, V>>>(&mut self, iter: I) {
        self.fill_entries(iter);
    }
}

impl<K, V, S> IntoIterator for Map<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.map(HashMap::into_iter),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a Map<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Nil maps are equal only to nil maps; allocated maps compare by content.
impl<K, V, S> PartialEq for Map<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V, S> Eq for Map<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Map<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            None => formatter.write_str("nil"),
            Some(map) => formatter.debug_map().entries(map.iter()).finish(),
        }
    }
}

/// Formats as `{key: value, ...}` in no defined order; a nil map prints `nil`
/// so it stays distinguishable from an empty one.
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for Map<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(map) = &self.inner else {
            return formatter.write_str("nil");
        };
        write!(formatter, "{{")?;
        for (index, (key, value)) in map.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// A nil map serializes as none (`null` in JSON), an allocated one as a map.
#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for Map<K, V, S>
where
    K: serde::Serialize + Eq + Hash,
    V: serde::Serialize,
    S: BuildHasher,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for Map<K, V, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<HashMap<K, V, S>> as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_nil_reads_as_empty() {
        let map: Map<i32, i32> = Map::nil();
        assert!(map.is_nil());
        assert!(map.is_empty());
        assert_eq!(map.iter().len(), 0);
        assert_eq!(map.get(&1), None);
        assert!(!map.contains_key(&1));
    }

    #[rstest]
    fn test_default_is_nil() {
        let map: Map<String, i32> = Map::default();
        assert!(map.is_nil());
    }

    #[rstest]
    fn test_nil_is_not_empty_map() {
        assert_ne!(Map::<i32, i32>::nil(), Map::new());
        assert_eq!(Map::<i32, i32>::nil(), Map::nil());
        assert_eq!(Map::<i32, i32>::new(), Map::new());
    }

    #[rstest]
    fn test_insert_and_get() {
        let mut map = Map::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("a", 2), Some(1));
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    fn test_try_insert_nil_fails() {
        let mut map: Map<&str, i32> = Map::nil();
        assert_eq!(
            map.try_insert("a", 1),
            Err(MapError::InvalidOperand { operation: "insert" })
        );
        assert!(map.is_nil());
    }

    #[rstest]
    #[should_panic(expected = "insert: cannot write into a nil map")]
    fn test_insert_nil_panics() {
        let mut map: Map<&str, i32> = Map::nil();
        map.insert("a", 1);
    }

    #[rstest]
    fn test_remove() {
        let mut map = Map::from([("a", 1), ("b", 2)]);
        assert_eq!(map.remove("a"), Some(1));
        assert_eq!(map.remove("a"), None);
        assert_eq!(map, Map::from([("b", 2)]));

        let mut nil: Map<&str, i32> = Map::nil();
        assert_eq!(nil.remove("a"), None);
    }

    #[rstest]
    fn test_get_mut() {
        let mut map = Map::from([("a", 1)]);
        if let Some(value) = map.get_mut("a") {
            *value += 10;
        }
        assert_eq!(map.get("a"), Some(&11));
    }

    #[rstest]
    fn test_keys_and_values_share_order() {
        let map = Map::from([(1, 10), (2, 20), (3, 30)]);
        let pairs: Vec<(i32, i32)> = map.keys().into_iter().zip(map.values()).collect();
        for (key, value) in pairs {
            assert_eq!(value, key * 10);
        }
    }

    #[rstest]
    fn test_into_entries() {
        let map = Map::from([("only", vec![1, 2])]);
        assert_eq!(map.into_entries(), vec![Entry::new("only", vec![1, 2])]);
    }

    #[rstest]
    fn test_fill_nil_with_nothing_stays_nil() {
        let mut map: Map<i32, i32> = Map::nil();
        assert!(map.try_fill_entries(std::iter::empty()).is_ok());
        assert!(map.is_nil());
    }

    #[rstest]
    fn test_filter_self_chains() {
        let mut map = Map::from([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
        map.filter_self_by_key(|key| key % 2 == 0)
            .filter_self_by_value(|value| *value != 'b');
        assert_eq!(map, Map::from([(4, 'd')]));
    }

    #[rstest]
    fn test_merge_self_left_keeps_receiver() {
        let mut map = Map::from([(1, "one")]);
        map.merge_self_left(&Map::from([(1, "uno"), (2, "dos")]));
        assert_eq!(map, Map::from([(1, "one"), (2, "dos")]));
    }

    #[rstest]
    fn test_merge_self_nil_with_empty_is_noop() {
        let mut map: Map<i32, i32> = Map::nil();
        assert!(map.try_merge_self(&Map::new()).is_ok());
        assert!(map.try_merge_self(&Map::nil()).is_ok());
        assert!(map.is_nil());
    }

    #[rstest]
    fn test_filter_keeps_hasher_and_content() {
        let map = Map::from([(1, 1), (2, 2)]);
        let filtered = map.filter(|_, _| true);
        assert_eq!(filtered, map);
    }

    #[rstest]
    fn test_extend() {
        let mut map = Map::from([(1, 1)]);
        map.extend([(2, 2), (1, 3)]);
        map.extend([Entry::new(4, 4)]);
        assert_eq!(map, Map::from([(1, 3), (2, 2), (4, 4)]));
    }

    #[rstest]
    fn test_conversions() {
        let plain: HashMap<i32, i32> = HashMap::from([(1, 2)]);
        let map = Map::from(plain.clone());
        assert_eq!(map.as_inner(), Some(&plain));
        assert_eq!(map.into_inner(), Some(plain));

        let nil: Map<i32, i32> = Map::from(None);
        assert!(nil.is_nil());
    }

    #[rstest]
    fn test_debug_and_display() {
        let nil: Map<i32, i32> = Map::nil();
        assert_eq!(format!("{nil:?}"), "nil");
        assert_eq!(format!("{nil}"), "nil");

        let empty: Map<i32, i32> = Map::new();
        assert_eq!(format!("{empty:?}"), "{}");
        assert_eq!(format!("{empty}"), "{}");

        let map = Map::from([("f", 4)]);
        assert_eq!(format!("{map:?}"), r#"{"f": 4}"#);
        assert_eq!(format!("{map}"), "{f: 4}");
    }

    #[rstest]
    fn test_iterators_report_exact_size() {
        let map = Map::from([(1, 1), (2, 2)]);
        assert_eq!(map.iter().len(), 2);
        assert_eq!(map.into_iter().len(), 2);

        let nil: Map<i32, i32> = Map::nil();
        assert_eq!(nil.into_iter().size_hint(), (0, Some(0)));
    }
}
