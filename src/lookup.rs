//! The `KeyLookup` trait, which defines the contract every strategy implements.

use crate::error::Result;
use crate::types::{Keyed, LookupKind};

/// A strategy that finds an item by its key.
///
/// Implementations are interchangeable: given the same input items, any two
/// strategies return an item with the same key for a non-null query. They
/// differ in cost and in the bounds they put on the key type:
///
/// - [`LinearLookup`](crate::lookups::LinearLookup) needs `PartialEq`.
/// - [`BinarySearchLookup`](crate::lookups::BinarySearchLookup) needs `Ord`.
/// - [`DictionaryLookup`](crate::lookups::DictionaryLookup) needs `Hash + Eq`.
///
/// A strategy may build internal state on its first query. That happens at
/// most once; if it fails the strategy is poisoned and keeps returning the
/// same error.
pub trait KeyLookup<T: Keyed> {
  /// Returns the `LookupKind` of this strategy.
  fn kind(&self) -> LookupKind;

  /// Finds the item whose key equals `key`.
  ///
  /// # Arguments
  ///
  /// * `key` - The key to look for. `None` is the null key.
  ///
  /// # Returns
  ///
  /// `Ok(Some(item))` on a match, `Ok(None)` when no item has the key, or a
  /// [`LookupError`](crate::error::LookupError) when reading keys or building
  /// the strategy's index failed.
  fn find_by_key(&self, key: Option<&T::Key>) -> Result<Option<&T>>;

  /// Finds the item with the given non-null key.
  fn get(&self, key: &T::Key) -> Result<Option<&T>> {
    self.find_by_key(Some(key))
  }

  /// Builds any lazy state now instead of on the first query.
  ///
  /// Call this before sharing a strategy across threads.
  fn warm(&self) -> Result<()> {
    Ok(())
  }

  /// Whether the lazy state (if any) has been built.
  fn is_materialized(&self) -> bool {
    true
  }

  /// Number of items the strategy searches over.
  fn len(&self) -> usize;

  /// Whether the strategy holds no items.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
