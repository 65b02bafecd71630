//! Instances: assets (or free text labels) placed on a floor plan.

use serde::{Deserialize, Serialize};

/// Instance `type` used for free-standing text labels.
pub const TEXT_INSTANCE: &str = "text";

/// A placed occurrence of an asset, or a text label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Instance {
  pub id:        String,
  /// Id of the placed asset. Empty for text labels.
  pub asset_id:  String,
  #[serde(rename = "type")]
  pub kind:      String,
  pub x:         f64,
  pub y:         f64,
  /// Rotation in degrees.
  pub rotation:  f64,
  pub locked:    bool,
  pub text:      String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub font_size: Option<f64>,
  pub color:     String,
}

impl Instance {
  pub fn is_text(&self) -> bool { self.kind == TEXT_INSTANCE }

  /// An instance that references no asset but is not a text label. Only
  /// text labels may leave `assetId` empty; orphans are kept but reported
  /// when a project is saved.
  pub fn is_orphan(&self) -> bool { self.asset_id.is_empty() && !self.is_text() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn orphan_detection() {
    let label = Instance {
      kind: TEXT_INSTANCE.into(),
      ..Instance::default()
    };
    assert!(label.is_text());
    assert!(!label.is_orphan());

    let chair = Instance {
      kind: "chair".into(),
      ..Instance::default()
    };
    assert!(chair.is_orphan());

    let placed = Instance {
      asset_id: "a_chair".into(),
      ..chair
    };
    assert!(!placed.is_orphan());
  }

  #[test]
  fn asset_id_uses_camel_case() {
    let inst: Instance =
      serde_json::from_str(r#"{"id":"i1","assetId":"a_bed_s","fontSize":0}"#)
        .unwrap();
    assert_eq!(inst.asset_id, "a_bed_s");
    assert_eq!(inst.font_size, Some(0.0));
  }
}
