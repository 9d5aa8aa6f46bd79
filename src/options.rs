//! Configuration for picking and preparing a lookup strategy.

use crate::types::LookupKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling how an [`AnyLookup`](crate::strategy::AnyLookup) is built.
///
/// With the `serde` feature the options can be read from configuration;
/// missing fields fall back to their defaults.
///
/// ```rust
/// # #[cfg(feature = "serde")] {
/// use keyseek::prelude::*;
///
/// let options: LookupOptions = serde_json::from_str(r#"{ "kind": "binary_search" }"#).unwrap();
/// assert_eq!(options.kind, LookupKind::BinarySearch);
/// assert!(!options.eager);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LookupOptions {
  /// The strategy to build. Defaults to [`LookupKind::Dictionary`].
  #[cfg_attr(feature = "serde", serde(default))]
  pub kind: LookupKind,
  /// Materialize the strategy's lazy state at construction time instead of
  /// on the first query. Construction then reports duplicate keys and broken
  /// key accessors directly.
  #[cfg_attr(feature = "serde", serde(default))]
  pub eager: bool,
}

impl LookupOptions {
  /// Sets the strategy to build.
  pub fn kind(mut self, kind: LookupKind) -> Self {
    self.kind = kind;
    self
  }

  /// Sets whether to materialize at construction time.
  pub fn eager(mut self, eager: bool) -> Self {
    self.eager = eager;
    self
  }
}
