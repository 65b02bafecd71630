//! Error types for `madori-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("project id is empty")]
  EmptyProjectId,

  #[error("invalid project id: {0:?}")]
  InvalidProjectId(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
