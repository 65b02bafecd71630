//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a [`Library`](crate::Library) operation or an API
/// handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// An invalid or empty project id.
  #[error(transparent)]
  Core(#[from] madori_core::Error),

  /// A document (stored or submitted) that is not JSON.
  #[error(transparent)]
  Document(#[from] madori_schema::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub(crate) fn store<E>(error: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(error))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) | ApiError::Core(_) => StatusCode::BAD_REQUEST,
      ApiError::Document(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Serialization(_) | ApiError::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
