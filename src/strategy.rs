//! Runtime selection between the built-in strategies.

use crate::error::Result;
use crate::lookup::KeyLookup;
use crate::lookups::{BinarySearchLookup, DictionaryLookup, LinearLookup};
use crate::options::LookupOptions;
use crate::types::{Keyed, LookupKind, Lookupable};
use std::hash::Hash;
use tracing::debug;

/// One of the built-in strategies, chosen at runtime.
///
/// `AnyLookup` dispatches [`KeyLookup`] calls to the wrapped strategy, so the
/// choice can come from configuration without boxing. It needs the union of
/// the strategies' bounds: `T: Clone` for the binary search copy and
/// `T::Key: Ord + Hash`.
///
/// # Examples
///
/// ```rust
/// use keyseek::prelude::*;
///
/// let items = vec![KeyedItem::new(3), KeyedItem::new(1), KeyedItem::new(2)];
///
/// for kind in LookupKind::ALL {
///     let lookup = AnyLookup::new(kind, &items);
///     assert_eq!(lookup.kind(), kind);
///     assert_eq!(lookup.get(&2).unwrap(), Some(&KeyedItem::new(2)));
///     assert_eq!(lookup.get(&5).unwrap(), None);
/// }
/// ```
#[derive(Debug)]
pub enum AnyLookup<'a, T: Keyed> {
  /// A [`LinearLookup`].
  Linear(LinearLookup<'a, T>),
  /// A [`BinarySearchLookup`].
  BinarySearch(BinarySearchLookup<T>),
  /// A [`DictionaryLookup`].
  Dictionary(DictionaryLookup<'a, T>),
}

impl<'a, T> AnyLookup<'a, T>
where
  T: Keyed + Clone + Lookupable,
  T::Key: Ord + Hash + Lookupable,
{
  /// Builds the strategy of the given kind over `items`. Nothing is
  /// materialized yet.
  pub fn new(kind: LookupKind, items: &'a [T]) -> Self {
    match kind {
      LookupKind::Linear => AnyLookup::Linear(LinearLookup::new(items)),
      LookupKind::BinarySearch => AnyLookup::BinarySearch(BinarySearchLookup::from_slice(items)),
      LookupKind::Dictionary => AnyLookup::Dictionary(DictionaryLookup::new(items)),
    }
  }

  /// Builds the strategy described by `options`.
  ///
  /// With `eager` set the lazy state is built immediately and any failure
  /// is returned here instead of from the first query.
  pub fn with_options(options: &LookupOptions, items: &'a [T]) -> Result<Self> {
    let lookup = Self::new(options.kind, items);
    if options.eager {
      debug!(kind = %options.kind, "warming lookup eagerly");
      lookup.warm()?;
    }
    Ok(lookup)
  }
}

impl<'a, T> AnyLookup<'a, T>
where
  T: Keyed + Lookupable,
  T::Key: Ord + Hash + Lookupable,
{
  /// The wrapped strategy as a trait object.
  fn as_dyn(&self) -> &dyn KeyLookup<T> {
    match self {
      AnyLookup::Linear(lookup) => lookup,
      AnyLookup::BinarySearch(lookup) => lookup,
      AnyLookup::Dictionary(lookup) => lookup,
    }
  }
}

impl<'a, T> KeyLookup<T> for AnyLookup<'a, T>
where
  T: Keyed + Lookupable,
  T::Key: Ord + Hash + Lookupable,
{
  fn kind(&self) -> LookupKind {
    self.as_dyn().kind()
  }

  fn find_by_key(&self, key: Option<&T::Key>) -> Result<Option<&T>> {
    self.as_dyn().find_by_key(key)
  }

  fn warm(&self) -> Result<()> {
    self.as_dyn().warm()
  }

  fn is_materialized(&self) -> bool {
    self.as_dyn().is_materialized()
  }

  fn len(&self) -> usize {
    self.as_dyn().len()
  }
}

impl<'a, T: Keyed> From<LinearLookup<'a, T>> for AnyLookup<'a, T> {
  fn from(lookup: LinearLookup<'a, T>) -> Self {
    AnyLookup::Linear(lookup)
  }
}

impl<'a, T: Keyed> From<BinarySearchLookup<T>> for AnyLookup<'a, T> {
  fn from(lookup: BinarySearchLookup<T>) -> Self {
    AnyLookup::BinarySearch(lookup)
  }
}

impl<'a, T: Keyed> From<DictionaryLookup<'a, T>> for AnyLookup<'a, T> {
  fn from(lookup: DictionaryLookup<'a, T>) -> Self {
    AnyLookup::Dictionary(lookup)
  }
}
