//! The `DocumentStore` trait and the keys it is addressed by.
//!
//! The trait is implemented by storage backends (e.g. `madori-store-fs`).
//! Higher layers depend on this abstraction, not on a concrete backend.
//!
//! A store deals in whole documents: reads return the complete bytes last
//! written, writes replace a document wholesale. There are no partial updates.

use std::{fmt, future::Future};

use crate::project::ProjectId;

// ─── Keys ────────────────────────────────────────────────────────────────────

/// Logical name of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKey {
  /// The shared asset catalog.
  GlobalAssets,
  Palette,
  /// The list of [`Project`](crate::project::Project) records.
  ProjectsIndex,
  /// The contents of one project.
  Project(ProjectId),
}

impl DocumentKey {
  /// The key as a file stem, e.g. `project_1712345678`.
  pub fn stem(&self) -> String {
    match self {
      Self::GlobalAssets => "global_assets".to_owned(),
      Self::Palette => "palette".to_owned(),
      Self::ProjectsIndex => "projects_index".to_owned(),
      Self::Project(id) => format!("project_{id}"),
    }
  }
}

impl fmt::Display for DocumentKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.stem())
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a document store backend.
///
/// Implementations must serialise access so that a read never observes a
/// partially-written document and a failed write leaves the previous version
/// in place.
pub trait DocumentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read a whole document. Returns `None` if it has never been written.
  fn read(
    &self,
    key: DocumentKey,
  ) -> impl Future<Output = Result<Option<Vec<u8>>, Self::Error>> + Send + '_;

  /// Replace a document with `bytes`.
  fn write(
    &self,
    key: DocumentKey,
    bytes: Vec<u8>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a document. Returns `false` if there was nothing to delete.
  fn remove(
    &self,
    key: DocumentKey,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
