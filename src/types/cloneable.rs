//! The clone capability.
//!
//! [`Cloneable`] is the contract a value type fulfils to be deep-copied by
//! [`Map::deep_clone`](crate::maps::Map::deep_clone). The copy is handed back
//! type-erased, so the map checks that it really is a value of its own value
//! type before storing it.

use std::any::Any;

/// A value that can produce an independent copy of itself.
///
/// The returned box must hold a value of type `Self`. Returning anything else
/// breaks the contract and makes [`Map::deep_clone`](crate::maps::Map::deep_clone)
/// fail with [`MapError::TypeMismatch`](crate::maps::MapError::TypeMismatch).
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use aki::types::Cloneable;
///
/// struct Counter {
///     hits: Vec<u32>,
/// }
///
/// impl Cloneable for Counter {
///     fn clone_boxed(&self) -> Box<dyn Any> {
///         Box::new(Counter { hits: self.hits.clone() })
///     }
/// }
///
/// let original = Counter { hits: vec![1, 2] };
/// let copy = original.clone_boxed().downcast::<Counter>().unwrap();
/// assert_eq!(copy.hits, vec![1, 2]);
/// ```
pub trait Cloneable {
    /// Returns an independent copy of this value, erased to [`Any`].
    fn clone_boxed(&self) -> Box<dyn Any>;
}

macro_rules! impl_cloneable_via_clone {
    ($($type:ty),* $(,)?) => {
        $(
            impl Cloneable for $type {
                #[inline]
                fn clone_boxed(&self) -> Box<dyn Any> {
                    Box::new(self.clone())
                }
            }
        )*
    };
}

impl_cloneable_via_clone!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

/// Stands in for a container copy when one of its elements broke the clone
/// contract, so the caller's downcast to the container type fails.
struct ElementMismatch;

/// Clones `value` through its own capability, or `None` if the copy is not a `T`.
fn clone_element<T: Cloneable + 'static>(value: &T) -> Option<T> {
    value.clone_boxed().downcast::<T>().ok().map(|boxed| *boxed)
}

/// Elements are copied through their own [`Cloneable`] implementation, so the
/// copy shares no state with `self` beyond what each element's copy shares.
impl<T: Cloneable + 'static> Cloneable for Vec<T> {
    fn clone_boxed(&self) -> Box<dyn Any> {
        match self.iter().map(clone_element).collect::<Option<Self>>() {
            Some(cloned) => Box::new(cloned),
            None => Box::new(ElementMismatch),
        }
    }
}

impl<T: Cloneable + 'static> Cloneable for Option<T> {
    fn clone_boxed(&self) -> Box<dyn Any> {
        match self.as_ref().map(clone_element) {
            None => Box::new(None::<T>),
            Some(Some(cloned)) => Box::new(Some(cloned)),
            Some(None) => Box::new(ElementMismatch),
        }
    }
}

impl<T: Cloneable + 'static> Cloneable for Box<T> {
    fn clone_boxed(&self) -> Box<dyn Any> {
        match clone_element(&**self) {
            Some(cloned) => Box::new(Self::new(cloned)),
            None => Box::new(ElementMismatch),
        }
    }
}
