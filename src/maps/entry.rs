//! Key-value pairs used for bulk import and export.

/// A single key-value pair of a [`Map`](super::Map).
///
/// Entries are the unit of [`Map::entries`](super::Map::entries),
/// [`Map::fill_entries`](super::Map::fill_entries) and
/// [`Map::from_entries`](super::Map::from_entries). They are built on demand
/// and never retained by the map.
///
/// # Examples
///
/// ```rust
/// use aki::maps::Entry;
///
/// let entry = Entry::new("key", 42);
/// assert_eq!(entry, Entry { key: "key", value: 42 });
/// assert_eq!(entry.into_pair(), ("key", 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    /// The key of the entry.
    pub key: K,
    /// The value of the entry.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into a `(key, value)` tuple.
    #[inline]
    #[must_use]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_entry() {
        let entry = Entry::new(1, 2.0);
        assert_eq!(entry, Entry { key: 1, value: 2.0 });
    }

    #[rstest]
    #[case((1, "one"))]
    #[case((0, ""))]
    fn test_tuple_conversions(#[case] pair: (i32, &'static str)) {
        let entry: Entry<i32, &str> = pair.into();
        assert_eq!(entry.key, pair.0);
        assert_eq!(entry.value, pair.1);

        let back: (i32, &str) = entry.into();
        assert_eq!(back, pair);
    }
}
