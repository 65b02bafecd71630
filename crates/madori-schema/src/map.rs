//! Field-by-field mapping from untyped JSON into the current types.
//!
//! These are the slow, lenient path: they accept any schema generation and
//! never fail. Documents that already decode strictly skip them.

use madori_core::{
  asset::Asset,
  entity::{
    DEFAULT_LAYER, EllipticalGeometry, Entity, EntityKind, PolygonGeometry,
    RectGeometry, TextContent,
  },
  geometry::{Point, Vec2},
  instance::Instance,
};
use serde_json::Value;

use crate::coerce::{array, field, present};

// ─── Geometry ────────────────────────────────────────────────────────────────

pub(crate) fn map_vec2(raw: &Value) -> Vec2 {
  Vec2 {
    x: field(raw, "x"),
    y: field(raw, "y"),
  }
}

/// A missing handle is the zero vector, not an error.
pub(crate) fn map_point(raw: &Value) -> Point {
  Point {
    x:        field(raw, "x"),
    y:        field(raw, "y"),
    h1:       raw.get("h1").map(map_vec2).unwrap_or_default(),
    h2:       raw.get("h2").map(map_vec2).unwrap_or_default(),
    is_curve: field(raw, "isCurve"),
    handles:  array(raw, "handles").map(|hs| hs.iter().map(map_vec2).collect()),
  }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// Every geometry field whose key is present gets populated, whatever the
/// entity's `type` says.
pub(crate) fn map_entity(raw: &Value) -> Entity {
  let layer: String = field(raw, "layer");
  let layer = if layer.is_empty() {
    DEFAULT_LAYER.to_owned()
  } else {
    layer
  };

  Entity {
    kind: EntityKind::from(field::<String>(raw, "type")),
    layer,
    color: field(raw, "color"),
    polygon: PolygonGeometry {
      points: array(raw, "points").map(|pts| pts.iter().map(map_point).collect()),
    },
    elliptical: EllipticalGeometry {
      cx:          present(raw, "cx"),
      cy:          present(raw, "cy"),
      rx:          present(raw, "rx"),
      ry:          present(raw, "ry"),
      rotation:    present(raw, "rotation"),
      start_angle: present(raw, "startAngle"),
      end_angle:   present(raw, "endAngle"),
      arc_mode:    present(raw, "arcMode"),
    },
    rect: RectGeometry {
      x: present(raw, "x"),
      y: present(raw, "y"),
      w: present(raw, "w"),
      h: present(raw, "h"),
    },
    text: TextContent {
      text:      present(raw, "text"),
      font_size: present(raw, "fontSize"),
    },
  }
}

// ─── Asset ───────────────────────────────────────────────────────────────────

/// `entities` wins over the legacy `shapes` key; with neither, the asset has
/// no entities.
pub(crate) fn map_asset(raw: &Value) -> Asset {
  let shapes = array(raw, "entities")
    .or_else(|| array(raw, "shapes"))
    .unwrap_or_default();

  Asset {
    id:               field(raw, "id"),
    name:             field(raw, "name"),
    kind:             field(raw, "type"),
    w:                field(raw, "w"),
    h:                field(raw, "h"),
    color:            field(raw, "color"),
    entities:         shapes.iter().map(map_entity).collect(),
    is_default_shape: field(raw, "isDefaultShape"),
    snap:             field(raw, "snap"),
    bound_x:          present(raw, "boundX"),
    bound_y:          present(raw, "boundY"),
  }
}

/// Map every element. The result is index-aligned with `raw`.
pub(crate) fn migrate_assets(raw: &[Value]) -> Vec<Asset> {
  raw.iter().map(map_asset).collect()
}

// ─── Instance ────────────────────────────────────────────────────────────────

pub(crate) fn map_instance(raw: &Value) -> Instance {
  Instance {
    id:        field(raw, "id"),
    asset_id:  field(raw, "assetId"),
    kind:      field(raw, "type"),
    x:         field(raw, "x"),
    y:         field(raw, "y"),
    rotation:  field(raw, "rotation"),
    locked:    field(raw, "locked"),
    text:      field(raw, "text"),
    font_size: present(raw, "fontSize"),
    color:     field(raw, "color"),
  }
}
