//! Core data types shared by every lookup strategy.

use crate::error::KeyAccessError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub trait Lookupable: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> Lookupable for T {}

#[cfg(not(feature = "parallel"))]
pub trait Lookupable {}
#[cfg(not(feature = "parallel"))]
impl<T> Lookupable for T {}

/// An item that can be found by a single key.
///
/// The key is optional: `None` is the null key. Reading the key is fallible
/// so that records whose key has to be derived (for example from a
/// serialized field) can report a defect instead of silently producing a
/// wrong key. Strategies propagate that failure to the caller of the query.
pub trait Keyed {
  /// The key type. Each strategy adds its own bounds on top of this.
  type Key;

  /// Returns the item's key, `Ok(None)` for a null key.
  fn key(&self) -> Result<Option<&Self::Key>, KeyAccessError>;
}

/// The stock keyed item: a record with exactly one key field.
///
/// The field is public and mutable. Lookups never mutate the items they are
/// given, so mutating a `KeyedItem` only matters before handing it to a
/// strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyedItem<K> {
  /// The key. `None` is the null key.
  pub key: Option<K>,
}

impl<K> KeyedItem<K> {
  /// Creates an item with the given key.
  pub fn new(key: K) -> Self {
    Self { key: Some(key) }
  }

  /// Creates an item with a null key.
  pub fn null() -> Self {
    Self { key: None }
  }
}

impl<K> From<K> for KeyedItem<K> {
  fn from(key: K) -> Self {
    Self::new(key)
  }
}

impl<K> Keyed for KeyedItem<K> {
  type Key = K;

  fn key(&self) -> Result<Option<&K>, KeyAccessError> {
    Ok(self.key.as_ref())
  }
}

/// An item keyed by a string.
pub type StringKey = KeyedItem<String>;

/// The total order used for sorting and searching keys.
///
/// Two null keys are equal, a null key sorts before every non-null key, and
/// non-null keys use their natural order. Sorting and searching must both
/// go through this function or the binary search breaks.
pub fn compare_keys<K: Ord + ?Sized>(left: Option<&K>, right: Option<&K>) -> Ordering {
  match (left, right) {
    (None, None) => Ordering::Equal,
    (None, Some(_)) => Ordering::Less,
    (Some(_), None) => Ordering::Greater,
    (Some(left), Some(right)) => left.cmp(right),
  }
}

/// The available lookup strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LookupKind {
  /// Scan the items in order on every query.
  Linear,
  /// Sort a private copy once, then binary search it.
  BinarySearch,
  /// Build a hash index once, then look keys up in it.
  #[default]
  Dictionary,
}

impl LookupKind {
  /// All strategies, in declaration order.
  pub const ALL: [LookupKind; 3] = [
    LookupKind::Linear,
    LookupKind::BinarySearch,
    LookupKind::Dictionary,
  ];

  /// The snake_case name used in configuration.
  pub fn as_str(&self) -> &'static str {
    match self {
      LookupKind::Linear => "linear",
      LookupKind::BinarySearch => "binary_search",
      LookupKind::Dictionary => "dictionary",
    }
  }
}

impl fmt::Display for LookupKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Returned when a string names no known lookup strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lookup kind `{0}`, expected linear, binary_search or dictionary")]
pub struct ParseLookupKindError(String);

impl FromStr for LookupKind {
  type Err = ParseLookupKindError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "linear" => Ok(LookupKind::Linear),
      "binary_search" | "binary-search" | "binary" => Ok(LookupKind::BinarySearch),
      "dictionary" | "hash" => Ok(LookupKind::Dictionary),
      _ => Err(ParseLookupKindError(s.to_string())),
    }
  }
}
