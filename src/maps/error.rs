//! Error types for map operations.
//!
//! Every failure a [`Map`](super::Map) can report is a contract violation on the
//! caller's side: mutating a nil map, or a [`Cloneable`](crate::types::Cloneable)
//! implementation handing back a value of the wrong type.

use thiserror::Error;

/// Errors that can occur when operating on a [`Map`](super::Map).
///
/// # Examples
///
/// ```rust
/// use aki::maps::{Entry, Map, MapError};
///
/// let mut map: Map<&str, i32> = Map::nil();
/// let error = map.try_fill_entry(Entry::new("a", 1)).unwrap_err();
///
/// assert_eq!(error, MapError::InvalidOperand { operation: "fill_entries" });
/// assert_eq!(
///     error.to_string(),
///     "fill_entries: cannot write into a nil map"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// An in-place operation was attempted on a map that was never allocated.
    #[error("{operation}: cannot write into a nil map")]
    InvalidOperand {
        /// The name of the operation that was rejected.
        operation: &'static str,
    },

    /// A [`Cloneable`](crate::types::Cloneable) value produced a clone of a
    /// different type than the map stores.
    #[error("clone produced a value that is not a `{expected}`")]
    TypeMismatch {
        /// The type name the clone was expected to have.
        expected: &'static str,
    },
}

impl MapError {
    pub(crate) fn invalid_operand(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected in-place operation on a nil map");
        Self::InvalidOperand { operation }
    }

    pub(crate) fn type_mismatch<V>() -> Self {
        let expected = std::any::type_name::<V>();
        tracing::debug!(expected, "cloned value has an unexpected type");
        Self::TypeMismatch { expected }
    }
}
