//! Deciding which assets of a strictly-decoded collection still need mapping.
//!
//! The strict decode silently ignores the legacy `shapes` key, so a legacy
//! asset comes out of it with no entities. Comparing each decoded asset with
//! its raw JSON finds exactly those, and only those get re-mapped. Assets that
//! already decoded correctly are left untouched.

use madori_core::asset::Asset;
use serde_json::Value;
use tracing::debug;

use crate::{coerce::array, map};

/// What [`reconcile`] will do with a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
  /// Every element decoded correctly; keep the strict decode.
  Current,
  /// Re-map only these indices.
  Partial(Vec<usize>),
  /// Re-map the whole collection from the raw values.
  Full,
}

/// An asset needs migrating when it decoded with no entities although its raw
/// form carries a non-empty `shapes` or `entities` array.
pub fn needs_migration(decoded: &Asset, raw: &Value) -> bool {
  let has_items = |key: &str| array(raw, key).is_some_and(|items| !items.is_empty());
  decoded.entities.is_empty() && (has_items("shapes") || has_items("entities"))
}

/// Compare a strict decode with the raw values it came from.
///
/// A length mismatch means indices cannot be trusted to line up, so the whole
/// collection is re-mapped.
pub fn plan(decoded: &[Asset], raw: &[Value]) -> Migration {
  if decoded.len() != raw.len() {
    return Migration::Full;
  }

  let flagged: Vec<usize> = decoded
    .iter()
    .zip(raw)
    .enumerate()
    .filter(|(_, (asset, raw))| needs_migration(asset, raw))
    .map(|(i, _)| i)
    .collect();

  if flagged.is_empty() {
    Migration::Current
  } else if flagged.len() == decoded.len() {
    Migration::Full
  } else {
    Migration::Partial(flagged)
  }
}

/// Apply [`plan`] and return the corrected collection.
pub fn reconcile(mut decoded: Vec<Asset>, raw: &[Value]) -> Vec<Asset> {
  match plan(&decoded, raw) {
    Migration::Current => decoded,
    Migration::Full => {
      debug!(count = raw.len(), "migrating whole asset collection");
      map::migrate_assets(raw)
    }
    Migration::Partial(indices) => {
      debug!(?indices, "migrating legacy assets in place");
      for i in indices {
        decoded[i] = map::map_asset(&raw[i]);
      }
      decoded
    }
  }
}
