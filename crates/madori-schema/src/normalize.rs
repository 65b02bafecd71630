//! Whole-document normalization for project files and asset catalogs.
//!
//! Three schema generations exist on disk, none of them tagged:
//!
//! 1. a bare array of placed instances, with no asset section;
//! 2. `{ "assets": [...], "instances": [...] }` with assets keyed `shapes`;
//! 3. the same object with assets keyed `entities` (current).
//!
//! Generations 2 and 3 can be mixed inside one `assets` array when an older
//! file was partially re-saved.

use madori_core::{asset::Asset, instance::Instance, project::ProjectData};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
  Result,
  detect::reconcile,
  map::{map_asset, map_instance},
};

// ─── Projects ────────────────────────────────────────────────────────────────

pub(crate) fn normalize(bytes: &[u8]) -> Result<ProjectData> {
  let value: Value = serde_json::from_slice(bytes)?;
  Ok(normalize_value(&value))
}

pub(crate) fn normalize_value(value: &Value) -> ProjectData {
  match value {
    Value::Array(_) => {
      debug!("normalizing bare instance array");
      ProjectData {
        local_assets: Vec::new(),
        instances:    normalize_instances(value),
      }
    }
    Value::Object(_) => normalize_document(value),
    _ => ProjectData::default(),
  }
}

/// Each section is decoded on its own, so a bad instance never sends the
/// asset section through the mapper (or the other way round).
fn normalize_document(value: &Value) -> ProjectData {
  ProjectData {
    local_assets: value
      .get("assets")
      .map(normalize_asset_value)
      .unwrap_or_default(),
    instances:    value
      .get("instances")
      .map(normalize_instances)
      .unwrap_or_default(),
  }
}

fn normalize_instances(value: &Value) -> Vec<Instance> {
  value
    .as_array()
    .map(|raw| raw.iter().map(|i| decode_or_map(i, map_instance)).collect())
    .unwrap_or_default()
}

// ─── Asset catalogs ──────────────────────────────────────────────────────────

pub(crate) fn normalize_asset_value(value: &Value) -> Vec<Asset> {
  let Some(raw) = value.as_array() else {
    return Vec::new();
  };

  let decoded = raw.iter().map(|a| decode_or_map(a, map_asset)).collect();
  reconcile(decoded, raw)
}

pub(crate) fn normalize_assets(bytes: &[u8]) -> Result<Vec<Asset>> {
  let value: Value = serde_json::from_slice(bytes)?;
  Ok(normalize_asset_value(&value))
}

// ─── Elements ────────────────────────────────────────────────────────────────

/// Strictly decode one element, or map it field by field if that fails.
///
/// Only objects are decoded strictly: serde would otherwise accept an array
/// element positionally, which the mapper never does.
fn decode_or_map<T: DeserializeOwned>(raw: &Value, map: fn(&Value) -> T) -> T {
  if !raw.is_object() {
    return map(raw);
  }
  T::deserialize(raw).unwrap_or_else(|error| {
    debug!(%error, "strict decode failed, mapping element field by field");
    map(raw)
  })
}
