//! Entities: the geometric primitives an asset is drawn from.
//!
//! An entity carries a `type` tag plus whichever geometry fields were present
//! when it was written. Fields are grouped by shape family but flattened on the
//! wire, so the persisted keys (`points`, `cx`, `startAngle`, `fontSize`, ...)
//! sit directly on the entity object.
//!
//! Every geometry field is optional: `None` means the key was absent, which a
//! renderer treats differently from an explicit zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Layer assigned to entities that do not name one.
pub const DEFAULT_LAYER: &str = "default";

fn default_layer() -> String { DEFAULT_LAYER.to_owned() }

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The entity `type` tag. Unknown tags are kept verbatim so they survive a
/// load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
  Polygon,
  Circle,
  Ellipse,
  Arc,
  Rect,
  Text,
  Other(String),
}

impl EntityKind {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Polygon => "polygon",
      Self::Circle => "circle",
      Self::Ellipse => "ellipse",
      Self::Arc => "arc",
      Self::Rect => "rect",
      Self::Text => "text",
      Self::Other(tag) => tag,
    }
  }
}

impl Default for EntityKind {
  fn default() -> Self { Self::Other(String::new()) }
}

impl From<String> for EntityKind {
  fn from(tag: String) -> Self {
    match tag.as_str() {
      "polygon" => Self::Polygon,
      "circle" => Self::Circle,
      "ellipse" => Self::Ellipse,
      "arc" => Self::Arc,
      "rect" => Self::Rect,
      "text" => Self::Text,
      _ => Self::Other(tag),
    }
  }
}

impl From<&str> for EntityKind {
  fn from(tag: &str) -> Self { Self::from(tag.to_owned()) }
}

impl From<EntityKind> for String {
  fn from(kind: EntityKind) -> Self {
    match kind {
      EntityKind::Other(tag) => tag,
      known => known.as_str().to_owned(),
    }
  }
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Geometry groups ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonGeometry {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub points: Option<Vec<Point>>,
}

/// Circles, ellipses and arcs. Angles are in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EllipticalGeometry {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cx:          Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cy:          Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rx:          Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ry:          Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rotation:    Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_angle: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_angle:   Option<f64>,
  /// How an arc is closed, e.g. `"chord"` or `"sector"`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub arc_mode:    Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectGeometry {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub x: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub y: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub w: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub h: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextContent {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text:      Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub font_size: Option<f64>,
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// One geometric primitive inside an asset.
///
/// A shape may carry fields from more than one geometry group; every group
/// whose keys were present is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
  #[serde(rename = "type", default)]
  pub kind:       EntityKind,
  #[serde(default = "default_layer")]
  pub layer:      String,
  #[serde(default)]
  pub color:      String,
  #[serde(flatten)]
  pub polygon:    PolygonGeometry,
  #[serde(flatten)]
  pub elliptical: EllipticalGeometry,
  #[serde(flatten)]
  pub rect:       RectGeometry,
  #[serde(flatten)]
  pub text:       TextContent,
}

impl Entity {
  /// A closed polygon on the default layer.
  pub fn polygon(points: Vec<Point>, color: impl Into<String>) -> Self {
    Self {
      kind: EntityKind::Polygon,
      layer: default_layer(),
      color: color.into(),
      polygon: PolygonGeometry {
        points: Some(points),
      },
      ..Self::default()
    }
  }

  /// The polygon vertices, or an empty slice when `points` was absent.
  pub fn points(&self) -> &[Point] {
    self.polygon.points.as_deref().unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn unknown_kind_round_trips_verbatim() {
    let entity: Entity =
      serde_json::from_value(json!({ "type": "spline", "color": "#000" }))
        .unwrap();
    assert_eq!(entity.kind, EntityKind::Other("spline".into()));
    assert_eq!(serde_json::to_value(&entity).unwrap()["type"], "spline");
  }

  #[test]
  fn missing_layer_decodes_as_default() {
    let entity: Entity =
      serde_json::from_value(json!({ "type": "polygon" })).unwrap();
    assert_eq!(entity.layer, DEFAULT_LAYER);
    assert!(entity.points().is_empty());
  }

  #[test]
  fn flattened_fields_keep_wire_names() {
    let entity: Entity = serde_json::from_value(json!({
      "type": "arc",
      "cx": 0,
      "startAngle": 90,
      "arcMode": "sector",
      "fontSize": 12,
    }))
    .unwrap();

    assert_eq!(entity.elliptical.cx, Some(0.0));
    assert_eq!(entity.elliptical.cy, None);
    assert_eq!(entity.elliptical.start_angle, Some(90.0));
    assert_eq!(entity.elliptical.arc_mode.as_deref(), Some("sector"));
    assert_eq!(entity.text.font_size, Some(12.0));

    let back = serde_json::to_value(&entity).unwrap();
    assert_eq!(back["cx"], 0.0);
    assert_eq!(back["startAngle"], 90.0);
    assert!(back.get("cy").is_none());
    assert!(back.get("points").is_none());
  }
}
