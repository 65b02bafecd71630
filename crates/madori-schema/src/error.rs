//! Error types for the schema normalizer.

use thiserror::Error;

/// The only failure the normalizer reports: input that is not JSON at all.
///
/// JSON that does not match any known schema generation is coerced, never
/// rejected.
#[derive(Debug, Error)]
pub enum Error {
  #[error("document is not valid JSON: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
