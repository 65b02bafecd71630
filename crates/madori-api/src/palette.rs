//! Handlers for `/palette`.

use std::sync::Arc;

use axum::{Json, extract::State};
use madori_core::{palette::Palette, store::DocumentStore};

use crate::{Library, error::Result};

/// `GET /palette`
pub async fn get_one<S>(
  State(library): State<Arc<Library<S>>>,
) -> Result<Json<Palette>>
where
  S: DocumentStore,
{
  Ok(Json(library.get_palette().await?))
}

/// `PUT /palette`
pub async fn replace<S>(
  State(library): State<Arc<Library<S>>>,
  Json(palette): Json<Palette>,
) -> Result<Json<Palette>>
where
  S: DocumentStore,
{
  library.save_palette(&palette).await?;
  Ok(Json(palette))
}
