//! The built-in `KeyLookup` strategies.
//!
//! # Available Strategies
//!
//! - [`LinearLookup`](crate::lookups::LinearLookup): scans on every query. No setup cost, O(n) per query.
//! - [`BinarySearchLookup`](crate::lookups::BinarySearchLookup): sorts a private copy once, O(log n) per query.
//! - [`DictionaryLookup`](crate::lookups::DictionaryLookup): builds a hash index once, O(1) per query.
//!
//! # Example: Swapping Strategies
//!
//! ```rust
//! use keyseek::prelude::*;
//!
//! let items: Vec<StringKey> = ["ash", "birch", "cedar"]
//!     .into_iter()
//!     .map(|name| StringKey::new(name.to_string()))
//!     .collect();
//!
//! let binary = BinarySearchLookup::from_slice(&items);
//! let strategies: Vec<Box<dyn KeyLookup<StringKey> + '_>> = vec![
//!     Box::new(LinearLookup::new(&items)),
//!     Box::new(binary),
//!     Box::new(DictionaryLookup::new(&items)),
//! ];
//!
//! for lookup in &strategies {
//!     let found = lookup.get(&"birch".to_string()).unwrap();
//!     assert_eq!(found, Some(&StringKey::new("birch".to_string())));
//! }
//! ```

/// Sorts once, then binary searches.
pub mod binary;
/// Builds a hash index once, then looks keys up in it.
pub mod dictionary;
/// Scans the items in order.
pub mod linear;

pub use binary::BinarySearchLookup;
pub use dictionary::DictionaryLookup;
pub use linear::LinearLookup;
