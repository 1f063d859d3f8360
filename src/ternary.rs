//! Conditional selection and zero-value fallback.
//!
//! Both arguments of every function here are already evaluated. Callers that
//! need lazy evaluation should branch at the call site instead.
//!
//! The zero value of a type is its [`Default`]: `0`, `""`, `false`, `None`,
//! an empty collection.
//!
//! # Examples
//!
//! ```rust
//! use aki::ternary::{first_non_zero, select, select_or_zero};
//!
//! assert_eq!(select(true, "a", "b"), "a");
//! assert_eq!(select_or_zero(false, "x"), "");
//! assert_eq!(first_non_zero("", "f"), "f");
//! assert_eq!(first_non_zero("a", "f"), "a");
//! ```

/// Returns `when_true` if `condition` holds, otherwise `when_false`.
#[inline]
pub fn select<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition { when_true } else { when_false }
}

/// Returns `value` if `condition` holds, otherwise the zero value of `T`.
#[inline]
pub fn select_or_zero<T: Default>(condition: bool, value: T) -> T {
    if condition { value } else { T::default() }
}

/// Returns `first` unless it is the zero value of `T`, in which case `second`.
///
/// `second` is returned unchecked, so two zero values yield zero.
///
/// # Examples
///
/// ```rust
/// use aki::ternary::first_non_zero;
///
/// assert_eq!(first_non_zero(0, 7), 7);
/// assert_eq!(first_non_zero(3, 7), 3);
/// assert_eq!(first_non_zero(0, 0), 0);
/// assert_eq!(first_non_zero(None, Some(1)), Some(1));
/// ```
#[inline]
pub fn first_non_zero<T: Default + PartialEq>(first: T, second: T) -> T {
    if first == T::default() { second } else { first }
}
