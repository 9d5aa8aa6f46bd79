//! Keyseek - interchangeable strategies for finding a record by its key.
//!
//! Keyseek provides a single lookup contract, [`KeyLookup`](lookup::KeyLookup),
//! with three implementations: a linear scan, a lazily sorted binary search
//! and a lazily built hash index. All three share one policy for null keys,
//! duplicate keys and empty inputs, and report a missing key as `Ok(None)`.

pub mod error;
#[cfg(feature = "serde")]
pub mod field;
pub mod lookup;
pub mod lookups;
pub mod options;
pub mod strategy;
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::error::{KeyAccessError, LookupError};
  #[cfg(feature = "serde")]
  pub use crate::field::*;
  pub use crate::lookup::*;
  pub use crate::lookups::*;
  pub use crate::options::*;
  pub use crate::strategy::*;
  pub use crate::types::*;
}
