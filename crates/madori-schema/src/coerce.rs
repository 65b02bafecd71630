//! Best-effort conversion of untyped JSON scalars.
//!
//! Every mapper reads its fields through here, so none of them has a failure
//! path: a missing key or a value of the wrong type becomes the zero value.

use serde_json::Value;

/// A primitive that can be read out of an arbitrary JSON value.
pub trait Coerce: Sized {
  /// Convert `value`, falling back to the zero value on absence or mismatch.
  fn coerce(value: Option<&Value>) -> Self;
}

impl Coerce for f64 {
  /// Accepts any JSON number (signed, unsigned, or float). Numeric strings are
  /// not parsed.
  fn coerce(value: Option<&Value>) -> Self {
    value.and_then(Value::as_f64).unwrap_or(0.0)
  }
}

impl Coerce for bool {
  fn coerce(value: Option<&Value>) -> Self {
    value.and_then(Value::as_bool).unwrap_or(false)
  }
}

impl Coerce for String {
  fn coerce(value: Option<&Value>) -> Self {
    value
      .and_then(Value::as_str)
      .map(str::to_owned)
      .unwrap_or_default()
  }
}

/// Read `key` from `obj`, defaulting when it is absent. A non-object `obj`
/// has no keys.
pub fn field<T: Coerce>(obj: &Value, key: &str) -> T { T::coerce(obj.get(key)) }

/// Read `key` only if it is present. A present key yields `Some` even when its
/// value is null or mistyped, so "explicitly zero" and "not specified" stay
/// distinct.
pub fn present<T: Coerce>(obj: &Value, key: &str) -> Option<T> {
  obj.get(key).map(|v| T::coerce(Some(v)))
}

/// The array under `key`, if `key` holds one.
pub fn array<'a>(obj: &'a Value, key: &str) -> Option<&'a [Value]> {
  obj.get(key).and_then(Value::as_array).map(Vec::as_slice)
}
