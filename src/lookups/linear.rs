//! A `KeyLookup` implementation that scans the items on every query.

use crate::error::{LookupError, Result};
use crate::lookup::KeyLookup;
use crate::types::{Keyed, LookupKind};
use tracing::trace;

/// Finds items by comparing every key in order.
///
/// `LinearLookup` borrows the caller's slice and never copies or reorders
/// it, so the first item with a matching key wins. Null keys compare equal
/// to a null query. There is no lazy state: construction is free and every
/// query costs O(n).
#[derive(Debug, Clone, Copy)]
pub struct LinearLookup<'a, T> {
  items: &'a [T],
}

impl<'a, T> LinearLookup<'a, T> {
  /// Wraps the given items without copying them.
  pub fn new(items: &'a [T]) -> Self {
    Self { items }
  }

  /// The wrapped items, in their original order.
  pub fn items(&self) -> &'a [T] {
    self.items
  }
}

impl<'a, T> KeyLookup<T> for LinearLookup<'a, T>
where
  T: Keyed,
  T::Key: PartialEq,
{
  fn kind(&self) -> LookupKind {
    LookupKind::Linear
  }

  fn find_by_key(&self, key: Option<&T::Key>) -> Result<Option<&T>> {
    for (position, item) in self.items.iter().enumerate() {
      let candidate = item
        .key()
        .map_err(|source| LookupError::key_access(position, source))?;
      if candidate == key {
        trace!(position, "linear scan matched");
        return Ok(Some(item));
      }
    }
    Ok(None)
  }

  fn len(&self) -> usize {
    self.items.len()
  }
}
