//! # aki
//!
//! Small generic helpers for maps and default values.
//!
//! ## Overview
//!
//! - **Maps**: [`Map`](maps::Map), a possibly-nil hash map with filtering,
//!   merging, copying and entry conversion, plus value search for comparable
//!   values and deep cloning for [`Cloneable`](types::Cloneable) values
//! - **Ternary helpers**: [`select`](ternary::select),
//!   [`select_or_zero`](ternary::select_or_zero) and
//!   [`first_non_zero`](ternary::first_non_zero)
//!
//! ## Feature Flags
//!
//! - `maps`: Map types (default)
//! - `ternary`: Conditional selection helpers (default)
//! - `serde`: `Serialize`/`Deserialize` for maps and entries
//! - `fxhash`: [`FxMap`](maps::FxMap) hashed with `rustc-hash`
//! - `ahash`: [`AHashMap`](maps::AHashMap) hashed with `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use aki::prelude::*;
//!
//! let mut map = Map::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
//! map.fill_entry(Entry::new(first_non_zero("", "f"), 4));
//!
//! assert_eq!(map.len(), 5);
//! assert_eq!(map.get("f"), Some(&4));
//! assert_eq!(map.find_key_of(&3), Some(&"c"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use aki::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "maps")]
    pub use crate::maps::*;

    #[cfg(feature = "ternary")]
    pub use crate::ternary::*;

    pub use crate::types::*;
}

#[cfg(feature = "maps")]
pub mod maps;

#[cfg(feature = "ternary")]
pub mod ternary;

pub mod types;
