//! A `KeyLookup` implementation that sorts once and binary searches.

use crate::error::{LookupError, Result};
use crate::lookup::KeyLookup;
use crate::types::{compare_keys, Keyed, LookupKind, Lookupable};
use std::cmp::Ordering;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

/// Finds items by binary searching a sorted private copy.
///
/// The items are copied on construction so the caller's ordering survives.
/// Sorting is deferred to the first query (or [`KeyLookup::warm`]) and done
/// exactly once; the copy never changes afterwards, so it stays sorted.
///
/// The order is the one defined by [`compare_keys`]: null keys first, then
/// ascending natural order. The sort is stable and the search returns the
/// leftmost match, so among equal keys the item that came first in the
/// input wins, like [`LinearLookup`](crate::lookups::LinearLookup).
///
/// An empty lookup answers every query with `Ok(None)` without sorting.
#[derive(Debug)]
pub struct BinarySearchLookup<T> {
  /// The private copy, in input order.
  items: Vec<T>,
  /// Positions into `items`, sorted by key once materialized.
  order: OnceLock<Result<Vec<usize>>>,
}

impl<T> BinarySearchLookup<T> {
  /// Takes ownership of the given items. Sorting is deferred.
  pub fn new(items: impl IntoIterator<Item = T>) -> Self {
    Self {
      items: items.into_iter().collect(),
      order: OnceLock::new(),
    }
  }

  /// Copies the given slice. The caller's slice is left untouched.
  pub fn from_slice(items: &[T]) -> Self
  where
    T: Clone,
  {
    Self::new(items.iter().cloned())
  }

  /// Whether the private copy has been sorted.
  pub fn is_sorted(&self) -> bool {
    matches!(self.order.get(), Some(Ok(_)))
  }

  /// Iterates the items in key order, sorting first if needed.
  ///
  /// An empty lookup yields nothing and stays unsorted.
  pub fn sorted(&self) -> Result<impl Iterator<Item = &T> + '_>
  where
    T: Keyed + Lookupable,
    T::Key: Ord + Lookupable,
  {
    let order: &[usize] = if self.items.is_empty() {
      &[]
    } else {
      self.materialize()?
    };
    Ok(order.iter().map(move |&position| &self.items[position]))
  }

  fn materialize(&self) -> Result<&[usize]>
  where
    T: Keyed + Lookupable,
    T::Key: Ord + Lookupable,
  {
    self
      .order
      .get_or_init(|| {
        debug!(items = self.items.len(), "sorting binary search lookup");
        let sorted = sort_order(&self.items);
        if let Err(err) = &sorted {
          warn!(error = %err, "binary search lookup is poisoned");
        }
        sorted
      })
      .as_deref()
      .map_err(Clone::clone)
  }
}

impl<T> KeyLookup<T> for BinarySearchLookup<T>
where
  T: Keyed + Lookupable,
  T::Key: Ord + Lookupable,
{
  fn kind(&self) -> LookupKind {
    LookupKind::BinarySearch
  }

  fn find_by_key(&self, key: Option<&T::Key>) -> Result<Option<&T>> {
    if self.items.is_empty() {
      return Ok(None);
    }
    let order = self.materialize()?;

    // Leftmost position whose key is not less than the probe.
    let (mut low, mut high) = (0, order.len());
    while low < high {
      let mid = low + (high - low) / 2;
      match compare_keys(key_at(&self.items, order[mid])?, key) {
        Ordering::Less => low = mid + 1,
        Ordering::Equal | Ordering::Greater => high = mid,
      }
    }

    let Some(&position) = order.get(low) else {
      return Ok(None);
    };
    if compare_keys(key_at(&self.items, position)?, key) == Ordering::Equal {
      trace!(position, "binary search matched");
      return Ok(Some(&self.items[position]));
    }
    Ok(None)
  }

  fn warm(&self) -> Result<()> {
    if self.items.is_empty() {
      return Ok(());
    }
    self.materialize().map(|_| ())
  }

  fn is_materialized(&self) -> bool {
    self.order.get().is_some()
  }

  fn len(&self) -> usize {
    self.items.len()
  }
}

fn key_at<T: Keyed>(items: &[T], position: usize) -> Result<Option<&T::Key>> {
  items[position]
    .key()
    .map_err(|source| LookupError::key_access(position, source))
}

/// Sorts positions into `items` by key.
///
/// Every key is read once up front, so the first accessor failure aborts
/// before sorting and the comparator itself cannot fail.
fn sort_order<T>(items: &[T]) -> Result<Vec<usize>>
where
  T: Keyed + Lookupable,
  T::Key: Ord + Lookupable,
{
  let mut keyed = (0..items.len())
    .map(|position| key_at(items, position).map(|key| (key, position)))
    .collect::<Result<Vec<_>>>()?;

  #[cfg(feature = "parallel")]
  keyed.par_sort_by(|a, b| compare_keys(a.0, b.0));
  #[cfg(not(feature = "parallel"))]
  keyed.sort_by(|a, b| compare_keys(a.0, b.0));

  Ok(keyed.into_iter().map(|(_, position)| position).collect())
}
