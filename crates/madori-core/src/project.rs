//! Projects: index metadata and per-project contents.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result, asset::Asset, instance::Instance, nullable::null_as_default,
};

// ─── ProjectId ───────────────────────────────────────────────────────────────

/// A validated project identifier.
///
/// Ids become part of a file name, so they are restricted to ASCII
/// alphanumerics, `-` and `_`. Older builds used decimal timestamps; new ids
/// are simple-format UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
  pub fn parse(id: &str) -> Result<Self> {
    if id.is_empty() {
      return Err(Error::EmptyProjectId);
    }
    let valid = id
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
      return Err(Error::InvalidProjectId(id.to_owned()));
    }
    Ok(Self(id.to_owned()))
  }

  pub fn generate() -> Self { Self(Uuid::new_v4().simple().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ProjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Project ─────────────────────────────────────────────────────────────────

/// One entry of the projects index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:         String,
  pub name:       String,
  /// Bumped on every rename and every content save.
  pub updated_at: DateTime<Utc>,
}

impl Project {
  pub fn new(id: &ProjectId, name: impl Into<String>) -> Self {
    Self {
      id:         id.to_string(),
      name:       name.into(),
      updated_at: Utc::now(),
    }
  }

  pub fn touch(&mut self) { self.updated_at = Utc::now(); }
}

// ─── ProjectData ─────────────────────────────────────────────────────────────

/// The full contents of one project document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
  /// Asset definitions local to this project.
  #[serde(rename = "assets", default, deserialize_with = "null_as_default")]
  pub local_assets: Vec<Asset>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub instances:    Vec<Instance>,
}
