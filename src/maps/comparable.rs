//! Operations for maps whose values can be compared for equality.

use super::map::Map;

impl<K, V: PartialEq, S> Map<K, V, S> {
    /// Returns `true` if any stored value equals `value`.
    ///
    /// # Complexity
    ///
    /// O(n), a linear scan over the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([(1, 2), (3, 4)]);
    /// assert!(map.contains(&4));
    /// assert!(!map.contains(&3));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.iter().any(|(_, candidate)| candidate == value)
    }

    /// Returns a key whose value equals `value`, or `None` if there is none.
    ///
    /// When several keys hold an equal value, which of them is returned
    /// depends on iteration order and must not be relied upon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([(1, 2), (3, 4), (5, 6), (7, 8)]);
    /// assert_eq!(map.find_key_of(&4), Some(&3));
    /// assert_eq!(map.find_key_of(&9), None);
    /// ```
    #[must_use]
    pub fn find_key_of(&self, value: &V) -> Option<&K> {
        self.iter()
            .find_map(|(key, candidate)| (candidate == value).then_some(key))
    }
}
