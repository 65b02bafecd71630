//! Assets: reusable room, furniture and fixture templates.

use serde::{Deserialize, Serialize};

use crate::{entity::Entity, nullable::null_as_default};

/// A reusable template, placed into projects through instances.
///
/// The global catalog and each project's local catalog are both plain
/// `Vec<Asset>`; ids are unique within one catalog only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Asset {
  pub id:               String,
  pub name:             String,
  /// Category tag: `room`, `furniture`, `fixture`, ...
  #[serde(rename = "type")]
  pub kind:             String,
  /// Nominal width in centimetres.
  pub w:                f64,
  /// Nominal height in centimetres.
  pub h:                f64,
  pub color:            String,
  #[serde(deserialize_with = "null_as_default")]
  pub entities:         Vec<Entity>,
  /// Set on catalog entries generated from the built-in defaults.
  pub is_default_shape: bool,
  /// Snap placed instances to the grid.
  pub snap:             bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bound_x:          Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bound_y:          Option<f64>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn legacy_shapes_key_decodes_to_no_entities() {
    // The strict decode ignores unknown keys; the normalizer relies on this to
    // spot assets that still need migrating.
    let asset: Asset = serde_json::from_value(json!({
      "id": "a1",
      "shapes": [{ "type": "polygon" }],
    }))
    .unwrap();
    assert_eq!(asset.id, "a1");
    assert!(asset.entities.is_empty());
  }

  #[test]
  fn bounds_are_written_only_when_set() {
    let mut asset = Asset {
      id: "a1".into(),
      ..Asset::default()
    };
    let json = serde_json::to_value(&asset).unwrap();
    assert!(json.get("boundX").is_none());
    assert_eq!(json["entities"], json!([]));
    assert_eq!(json["isDefaultShape"], false);

    asset.bound_x = Some(0.0);
    let json = serde_json::to_value(&asset).unwrap();
    assert_eq!(json["boundX"], 0.0);
  }
}
