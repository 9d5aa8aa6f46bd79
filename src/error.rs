//! Error types returned by key lookups.
//!
//! A missing key is never an error: every strategy reports it as `Ok(None)`.
//! The variants here are the fatal kinds, raised while reading keys or while
//! materializing a strategy's lazy state.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = LookupError> = std::result::Result<T, E>;

/// A failure raised by an item's key accessor.
///
/// The accessor's own error is carried verbatim so callers can tell a broken
/// record apart from a broken index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyAccessError {
  /// The record has no field with the requested name.
  #[error("field `{0}` is missing")]
  MissingField(String),
  /// The field exists but holds a value that cannot act as a key.
  #[error("field `{field}` holds {kind}, expected a string, number or bool")]
  UnsupportedField {
    /// Name of the offending field.
    field: String,
    /// Human readable kind of the value found, e.g. "an array".
    kind: &'static str,
  },
  /// The record could not be turned into a JSON value.
  #[error("item could not be serialized: {0}")]
  Serialize(String),
  /// Any other accessor failure.
  #[error("{0}")]
  Custom(String),
}

impl KeyAccessError {
  /// Creates a free-form accessor error.
  pub fn custom(message: impl Into<String>) -> Self {
    Self::Custom(message.into())
  }
}

/// A fatal lookup failure.
///
/// Both variants only arise while keys are being read. For the binary search
/// and dictionary strategies that happens during the one-time materialization,
/// after which the failing index keeps returning the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
  /// Two items share a key while building a hash index.
  ///
  /// Two null keys count as equal, so they clash as well.
  #[error("duplicate key: items at positions {first} and {second} share a key")]
  DuplicateKey {
    /// Position of the item that claimed the key first.
    first: usize,
    /// Position of the clashing item.
    second: usize,
  },
  /// Reading the key of an item failed.
  #[error("failed to read the key of the item at position {position}: {source}")]
  KeyAccess {
    /// Position of the item in input order.
    position: usize,
    /// The accessor's error.
    source: KeyAccessError,
  },
}

impl LookupError {
  pub(crate) fn key_access(position: usize, source: KeyAccessError) -> Self {
    Self::KeyAccess { position, source }
  }
}
