//! Deserialize an explicit JSON `null` as the field's default value.
//!
//! Older builds wrote `null` for empty collections and unset handles. Without
//! this, a single `null` would fail the strict decode of a whole document.

use serde::{Deserialize, Deserializer};

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
