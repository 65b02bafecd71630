//! Planar primitives shared by entities and instances.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// A 2D offset, used for bezier control handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec2 {
  pub x: f64,
  pub y: f64,
}

impl Vec2 {
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  pub fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// A polygon vertex with optional bezier handles.
///
/// `h1` and `h2` are the incoming and outgoing handles, relative to the
/// vertex. A zero handle means "no curve handle" rather than a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Point {
  pub x:        f64,
  pub y:        f64,
  #[serde(deserialize_with = "null_as_default")]
  pub h1:       Vec2,
  #[serde(deserialize_with = "null_as_default")]
  pub h2:       Vec2,
  pub is_curve: bool,
  /// Extra control handles for richer curve representations. Written back
  /// only when the source carried them.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub handles:  Option<Vec<Vec2>>,
}

impl Point {
  /// A straight-edged vertex with zero handles.
  pub fn corner(x: f64, y: f64) -> Self {
    Self {
      x,
      y,
      ..Self::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn point_without_handles_omits_the_key() {
    let json = serde_json::to_value(Point::corner(1.0, 2.0)).unwrap();
    assert!(json.get("handles").is_none());
    assert_eq!(json["isCurve"], false);
    assert_eq!(json["h1"]["x"], 0.0);
  }

  #[test]
  fn null_handle_decodes_as_zero() {
    let p: Point =
      serde_json::from_str(r#"{"x":3,"y":4,"h1":null,"isCurve":true}"#).unwrap();
    assert_eq!(p.h1, Vec2::ZERO);
    assert_eq!(p.h2, Vec2::ZERO);
    assert!(p.is_curve);
    assert_eq!((p.x, p.y), (3.0, 4.0));
  }
}
