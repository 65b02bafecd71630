//! Versioned-document normalizer for Madori.
//!
//! Converts JSON written by any past schema generation into the current
//! [`madori_core`] types. Pure synchronous; no I/O. The only error is input
//! that is not JSON at all; everything else is coerced.
//!
//! # Quick start
//!
//! ```no_run
//! let legacy = br#"[{"id":"i1","x":5,"y":5,"type":"chair"}]"#;
//! let data = madori_schema::normalize(legacy).unwrap();
//! assert!(data.local_assets.is_empty());
//! assert_eq!(data.instances[0].id, "i1");
//! ```

pub mod coerce;
pub mod detect;
pub mod error;
mod map;
mod normalize;

pub use detect::{Migration, needs_migration};
pub use error::{Error, Result};
use madori_core::{
  asset::Asset,
  entity::Entity,
  geometry::{Point, Vec2},
  instance::Instance,
  project::ProjectData,
};
use serde_json::Value;

// ─── Documents ───────────────────────────────────────────────────────────────

/// Normalize a project document of any generation.
pub fn normalize(bytes: &[u8]) -> Result<ProjectData> {
  normalize::normalize(bytes)
}

/// Normalize a project document that may not exist yet. A missing document
/// is an empty project, not an error.
pub fn normalize_optional(bytes: Option<&[u8]>) -> Result<ProjectData> {
  bytes.map_or_else(|| Ok(ProjectData::default()), normalize)
}

/// Normalize an already-parsed project document. Never fails.
pub fn normalize_value(value: &Value) -> ProjectData {
  normalize::normalize_value(value)
}

/// Normalize an asset catalog (a top-level array of assets).
pub fn normalize_assets(bytes: &[u8]) -> Result<Vec<Asset>> {
  normalize::normalize_assets(bytes)
}

/// Normalize an already-parsed asset catalog. Never fails; a value that is not
/// an array is an empty catalog.
pub fn normalize_asset_value(value: &Value) -> Vec<Asset> {
  normalize::normalize_asset_value(value)
}

// ─── Element mappers ─────────────────────────────────────────────────────────

/// Map one raw asset, accepting either the `entities` or legacy `shapes` key.
pub fn map_asset(raw: &Value) -> Asset { map::map_asset(raw) }

/// Map every raw asset. The output is index-aligned with the input.
pub fn migrate_assets(raw: &[Value]) -> Vec<Asset> { map::migrate_assets(raw) }

pub fn map_entity(raw: &Value) -> Entity { map::map_entity(raw) }

pub fn map_instance(raw: &Value) -> Instance { map::map_instance(raw) }

pub fn map_point(raw: &Value) -> Point { map::map_point(raw) }

pub fn map_vec2(raw: &Value) -> Vec2 { map::map_vec2(raw) }
