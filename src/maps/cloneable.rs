//! Deep cloning for maps whose values implement [`Cloneable`].

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::error::MapError;
use super::map::Map;
use crate::types::Cloneable;

impl<K, V, S> Map<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Cloneable + 'static,
    S: BuildHasher + Clone,
{
    /// Returns a new map in which every value is an independent clone of the
    /// original, produced by [`Cloneable::clone_boxed`].
    ///
    /// A nil map clones to a nil map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::TypeMismatch`] if any value's clone is not a `V`.
    /// No partial result is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aki::maps::Map;
    ///
    /// let map = Map::from([("a", vec![1, 2])]);
    /// let mut cloned = map.deep_clone().unwrap();
    /// cloned.get_mut("a").unwrap().push(3);
    ///
    /// assert_eq!(map.get("a"), Some(&vec![1, 2]));
    /// assert_eq!(cloned.get("a"), Some(&vec![1, 2, 3]));
    /// ```
    pub fn deep_clone(&self) -> Result<Self, MapError> {
        let Some(map) = self.as_inner() else {
            return Ok(Self::nil());
        };

        let mut cloned = HashMap::with_capacity_and_hasher(map.len(), map.hasher().clone());
        for (key, value) in map {
            let value = value
                .clone_boxed()
                .downcast::<V>()
                .map_err(|_| MapError::type_mismatch::<V>())?;
            cloned.insert(key.clone(), *value);
        }
        Ok(Self::from(cloned))
    }
}
