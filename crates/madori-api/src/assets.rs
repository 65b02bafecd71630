//! Handlers for `/assets` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/assets` | The global catalog; defaults if never saved |
//! | `PUT`  | `/assets` | Body: asset array of any generation; 400 if not an array |
//! | `GET`  | `/assets/export` | `{"json": "..."}` |
//! | `POST` | `/assets/import` | Body: `{"json": "...", "merge": true}` |

use std::sync::Arc;

use axum::{Json, extract::State};
use madori_core::{asset::Asset, store::DocumentStore};
use serde::Deserialize;
use serde_json::Value;

use crate::{Exported, Library, error::Result};

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /assets`
pub async fn list<S>(
  State(library): State<Arc<Library<S>>>,
) -> Result<Json<Vec<Asset>>>
where
  S: DocumentStore,
{
  Ok(Json(library.get_assets().await?))
}

// ─── Replace ─────────────────────────────────────────────────────────────────

/// `PUT /assets`: the body is normalized before it is stored, and the stored
/// catalog is echoed back. A body that is not an array is rejected.
pub async fn replace<S>(
  State(library): State<Arc<Library<S>>>,
  Json(body): Json<Value>,
) -> Result<Json<Vec<Asset>>>
where
  S: DocumentStore,
{
  Ok(Json(library.replace_assets(&body).await?))
}

// ─── Export / import ─────────────────────────────────────────────────────────

/// `GET /assets/export`
pub async fn export<S>(
  State(library): State<Arc<Library<S>>>,
) -> Result<Json<Exported>>
where
  S: DocumentStore,
{
  let json = library.export_assets().await?;
  Ok(Json(Exported { json }))
}

#[derive(Debug, Deserialize)]
pub struct ImportBody {
  pub json:  String,
  #[serde(default)]
  pub merge: bool,
}

/// `POST /assets/import`
pub async fn import<S>(
  State(library): State<Arc<Library<S>>>,
  Json(body): Json<ImportBody>,
) -> Result<Json<Vec<Asset>>>
where
  S: DocumentStore,
{
  let assets = library.import_assets(&body.json, body.merge).await?;
  Ok(Json(assets))
}
