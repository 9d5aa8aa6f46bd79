//! A `KeyLookup` implementation backed by a lazily built hash index.

use crate::error::{LookupError, Result};
use crate::lookup::KeyLookup;
use crate::types::{Keyed, LookupKind};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

type Index<'a, K> = HashMap<Option<&'a K>, usize>;

/// Finds items through a hash index built on the first query.
///
/// The caller's slice is borrowed, not copied. The index maps each key to
/// the position of its item and is built exactly once. Two null keys are
/// equal and a null key never equals a non-null one, so the index may hold
/// at most one null-keyed item.
///
/// Building fails if any key cannot be read or if two items share a key
/// (including two null keys). The failure is returned to the query that
/// triggered the build and to every later query.
///
/// # Null queries
///
/// A null query always returns `Ok(None)`, even when the index holds a
/// null-keyed item. The index is still built first, so construction errors
/// surface on any first query. The other strategies do find null-keyed
/// items; this asymmetry is kept on purpose.
pub struct DictionaryLookup<'a, T: Keyed> {
  items: &'a [T],
  index: OnceLock<Result<Index<'a, T::Key>>>,
}

impl<'a, T: Keyed> DictionaryLookup<'a, T> {
  /// Wraps the given items without copying them. The index is built later.
  pub fn new(items: &'a [T]) -> Self {
    Self {
      items,
      index: OnceLock::new(),
    }
  }

  /// The wrapped items, in their original order.
  pub fn items(&self) -> &'a [T] {
    self.items
  }
}

impl<T: Keyed> fmt::Debug for DictionaryLookup<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryLookup")
      .field("items", &self.items.len())
      .field("materialized", &self.index.get().is_some())
      .finish()
  }
}

impl<'a, T> DictionaryLookup<'a, T>
where
  T: Keyed,
  T::Key: Hash + Eq,
{
  fn materialize(&self) -> Result<&Index<'a, T::Key>> {
    self
      .index
      .get_or_init(|| {
        debug!(items = self.items.len(), "building dictionary lookup index");
        let built = build_index(self.items);
        match &built {
          Ok(index) => debug!(keys = index.len(), "dictionary lookup index built"),
          Err(err) => warn!(error = %err, "dictionary lookup is poisoned"),
        }
        built
      })
      .as_ref()
      .map_err(Clone::clone)
  }
}

impl<'a, T> KeyLookup<T> for DictionaryLookup<'a, T>
where
  T: Keyed,
  T::Key: Hash + Eq,
{
  fn kind(&self) -> LookupKind {
    LookupKind::Dictionary
  }

  fn find_by_key(&self, key: Option<&T::Key>) -> Result<Option<&T>> {
    let index = self.materialize()?;
    let Some(key) = key else {
      trace!("null query against dictionary lookup");
      return Ok(None);
    };
    Ok(index.get(&Some(key)).map(|&position| &self.items[position]))
  }

  fn warm(&self) -> Result<()> {
    self.materialize().map(|_| ())
  }

  fn is_materialized(&self) -> bool {
    self.index.get().is_some()
  }

  fn len(&self) -> usize {
    self.items.len()
  }
}

fn build_index<T>(items: &[T]) -> Result<Index<'_, T::Key>>
where
  T: Keyed,
  T::Key: Hash + Eq,
{
  let mut index = HashMap::with_capacity(items.len());
  for (position, item) in items.iter().enumerate() {
    let key = item
      .key()
      .map_err(|source| LookupError::key_access(position, source))?;
    match index.entry(key) {
      Entry::Occupied(entry) => {
        return Err(LookupError::DuplicateKey {
          first: *entry.get(),
          second: position,
        })
      }
      Entry::Vacant(entry) => {
        entry.insert(position);
      }
    }
  }
  Ok(index)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::KeyAccessError;
  use crate::types::{KeyedItem, StringKey};

  #[derive(Debug)]
  struct Unreadable;

  impl Keyed for Unreadable {
    type Key = String;

    fn key(&self) -> std::result::Result<Option<&String>, KeyAccessError> {
      Err(KeyAccessError::custom("getter threw"))
    }
  }

  #[test]
  fn test_builds_lazily_and_finds() {
    let items: Vec<StringKey> = ["red", "green", "blue"]
      .into_iter()
      .map(|k| StringKey::new(k.to_string()))
      .collect();
    let lookup = DictionaryLookup::new(&items);
    assert!(!lookup.is_materialized());

    let found = lookup.get(&"green".to_string()).unwrap().unwrap();
    assert!(std::ptr::eq(found, &items[1]));
    assert!(lookup.is_materialized());
    assert_eq!(lookup.get(&"violet".to_string()).unwrap(), None);
  }

  #[test]
  fn test_duplicate_keys_fail() {
    let items = vec![KeyedItem::new('k'), KeyedItem::new('x'), KeyedItem::new('k')];
    let lookup = DictionaryLookup::new(&items);
    assert_eq!(
      lookup.get(&'x').unwrap_err(),
      LookupError::DuplicateKey { first: 0, second: 2 }
    );
  }

  #[test]
  fn test_two_null_keys_are_duplicates() {
    let items = vec![KeyedItem::<u8>::null(), KeyedItem::null()];
    let lookup = DictionaryLookup::new(&items);
    assert_eq!(
      lookup.warm().unwrap_err(),
      LookupError::DuplicateKey { first: 0, second: 1 }
    );
  }

  #[test]
  fn test_null_query_never_matches() {
    let items = vec![KeyedItem::null(), KeyedItem::new(1)];
    let lookup = DictionaryLookup::new(&items);

    assert_eq!(lookup.find_by_key(None).unwrap(), None);
    assert!(lookup.is_materialized());
    assert_eq!(lookup.get(&1).unwrap(), Some(&KeyedItem::new(1)));
  }

  #[test]
  fn test_null_query_still_reports_build_errors() {
    let items = vec![Unreadable];
    let lookup = DictionaryLookup::new(&items);
    let err = lookup.find_by_key(None).unwrap_err();
    assert_eq!(
      err,
      LookupError::key_access(0, KeyAccessError::custom("getter threw"))
    );
    assert_eq!(lookup.get(&"a".to_string()).unwrap_err(), err);
  }

  #[test]
  fn test_empty_input() {
    let items: Vec<KeyedItem<i64>> = Vec::new();
    let lookup = DictionaryLookup::new(&items);
    assert_eq!(lookup.get(&0).unwrap(), None);
    assert!(lookup.is_empty());
  }
}
