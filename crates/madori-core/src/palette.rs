//! The colour palette document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Swatches offered by the editor, plus per-category default colours.
///
/// Keys written by newer editors are kept in `extra` and written back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Palette {
  #[serde(default)]
  pub colors:   Vec<String>,
  /// Asset category (`room`, `furniture`, ...) to default fill colour.
  #[serde(default)]
  pub defaults: BTreeMap<String, String>,
  #[serde(flatten)]
  pub extra:    Map<String, Value>,
}
