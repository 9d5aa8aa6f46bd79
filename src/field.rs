//! Keys taken from a named field of any serializable record.

use crate::error::KeyAccessError;
use crate::types::Keyed;
use serde::Serialize;
use serde_json::Value;

/// Wraps a serializable record and uses one of its fields as the key.
///
/// The record is serialized once, when it is wrapped, and the field is
/// rendered to a string: strings are used as-is, numbers and booleans are
/// printed, and JSON `null` becomes the null key. If the field is missing,
/// holds an array or object, or the record cannot be serialized, the
/// failure is kept and returned from [`Keyed::key`], so the strategy that
/// reads the key reports it as a
/// [`LookupError::KeyAccess`](crate::error::LookupError::KeyAccess).
///
/// # Examples
///
/// ```rust
/// use keyseek::prelude::*;
///
/// #[derive(serde::Serialize)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// let users = FieldKeyed::wrap_all(
///     vec![
///         User { id: 7, name: "ada".into() },
///         User { id: 9, name: "grace".into() },
///     ],
///     "id",
/// );
///
/// let lookup = DictionaryLookup::new(&users);
/// let found = lookup.get(&"9".to_string()).unwrap().unwrap();
/// assert_eq!(found.item().name, "grace");
/// ```
#[derive(Debug, Clone)]
pub struct FieldKeyed<T> {
  item: T,
  field: String,
  key: Result<Option<String>, KeyAccessError>,
}

impl<T: Serialize> FieldKeyed<T> {
  /// Wraps `item`, keyed by the value of `field`.
  pub fn new(item: T, field: impl Into<String>) -> Self {
    let field = field.into();
    let key = extract_key(&item, &field);
    Self { item, field, key }
  }

  /// Wraps every item, keyed by the same field.
  pub fn wrap_all(items: impl IntoIterator<Item = T>, field: &str) -> Vec<Self> {
    items
      .into_iter()
      .map(|item| Self::new(item, field))
      .collect()
  }
}

impl<T> FieldKeyed<T> {
  /// The wrapped record.
  pub fn item(&self) -> &T {
    &self.item
  }

  /// The name of the key field.
  pub fn field(&self) -> &str {
    &self.field
  }

  /// Unwraps the record.
  pub fn into_inner(self) -> T {
    self.item
  }
}

impl<T> Keyed for FieldKeyed<T> {
  type Key = String;

  fn key(&self) -> Result<Option<&String>, KeyAccessError> {
    self.key.as_ref().map(Option::as_ref).map_err(Clone::clone)
  }
}

/// Extracts the value of `field` from a serializable item as a key string.
fn extract_key<T>(item: &T, field: &str) -> Result<Option<String>, KeyAccessError>
where
  T: Serialize,
{
  let value = serde_json::to_value(item).map_err(|err| KeyAccessError::Serialize(err.to_string()))?;
  let field_value = value
    .get(field)
    .ok_or_else(|| KeyAccessError::MissingField(field.to_string()))?;

  match field_value {
    Value::Null => Ok(None),
    Value::String(s) => Ok(Some(s.clone())),
    Value::Number(n) => Ok(Some(n.to_string())),
    Value::Bool(b) => Ok(Some(b.to_string())),
    Value::Array(_) => Err(KeyAccessError::UnsupportedField {
      field: field.to_string(),
      kind: "an array",
    }),
    Value::Object(_) => Err(KeyAccessError::UnsupportedField {
      field: field.to_string(),
      kind: "an object",
    }),
  }
}
