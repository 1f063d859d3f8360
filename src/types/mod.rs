//! Value capabilities consumed by the map types.
//!
//! - [`Cloneable`]: a value that can produce an independent copy of itself

mod cloneable;

pub use cloneable::Cloneable;
