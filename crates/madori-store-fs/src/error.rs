//! Error type for `madori-store-fs`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error on {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("data directory {} is not a directory", .0.display())]
  NotADirectory(PathBuf),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
