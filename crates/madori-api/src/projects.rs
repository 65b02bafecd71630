//! Handlers for `/projects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/projects` | The projects index |
//! | `POST`   | `/projects` | Body: `{"name":"Flat"}`; 201 |
//! | `POST`   | `/projects/import` | Body: `{"name":"Flat","json":"..."}`; 201 |
//! | `GET`    | `/projects/{id}` | Normalized contents; empty if never saved |
//! | `PUT`    | `/projects/{id}` | Body: project object or instance array; 400 otherwise |
//! | `PATCH`  | `/projects/{id}` | Body: `{"name":"New name"}`; 404 if unknown |
//! | `DELETE` | `/projects/{id}` | 204 |
//! | `GET`    | `/projects/{id}/export` | `{"json": "..."}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use madori_core::{
  project::{Project, ProjectData},
  store::DocumentStore,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
  Exported, Library,
  error::{ApiError, Result},
};

#[derive(Debug, Deserialize)]
pub struct NameBody {
  pub name: String,
}

fn require_name(name: &str) -> Result<()> {
  if name.trim().is_empty() {
    return Err(ApiError::BadRequest("project name is empty".to_owned()));
  }
  Ok(())
}

// ─── List / create ───────────────────────────────────────────────────────────

/// `GET /projects`
pub async fn list<S>(
  State(library): State<Arc<Library<S>>>,
) -> Result<Json<Vec<Project>>>
where
  S: DocumentStore,
{
  Ok(Json(library.list_projects().await?))
}

/// `POST /projects` with body `{"name":"Flat"}`
pub async fn create<S>(
  State(library): State<Arc<Library<S>>>,
  Json(body): Json<NameBody>,
) -> Result<impl IntoResponse>
where
  S: DocumentStore,
{
  require_name(&body.name)?;
  let project = library.create_project(&body.name).await?;
  Ok((StatusCode::CREATED, Json(project)))
}

// ─── One project ─────────────────────────────────────────────────────────────

/// `GET /projects/{id}`
pub async fn get_one<S>(
  State(library): State<Arc<Library<S>>>,
  Path(id): Path<String>,
) -> Result<Json<ProjectData>>
where
  S: DocumentStore,
{
  Ok(Json(library.get_project(&id).await?))
}

/// `PUT /projects/{id}`: stores and echoes the normalized document.
pub async fn save_one<S>(
  State(library): State<Arc<Library<S>>>,
  Path(id): Path<String>,
  Json(body): Json<Value>,
) -> Result<Json<ProjectData>>
where
  S: DocumentStore,
{
  Ok(Json(library.save_project(&id, &body).await?))
}

/// `PATCH /projects/{id}` with body `{"name":"New name"}`
pub async fn rename_one<S>(
  State(library): State<Arc<Library<S>>>,
  Path(id): Path<String>,
  Json(body): Json<NameBody>,
) -> Result<Json<Project>>
where
  S: DocumentStore,
{
  require_name(&body.name)?;
  Ok(Json(library.rename_project(&id, &body.name).await?))
}

/// `DELETE /projects/{id}`
pub async fn delete_one<S>(
  State(library): State<Arc<Library<S>>>,
  Path(id): Path<String>,
) -> Result<StatusCode>
where
  S: DocumentStore,
{
  library.delete_project(&id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Export / import ─────────────────────────────────────────────────────────

/// `GET /projects/{id}/export`
pub async fn export_one<S>(
  State(library): State<Arc<Library<S>>>,
  Path(id): Path<String>,
) -> Result<Json<Exported>>
where
  S: DocumentStore,
{
  let json = library.export_project(&id).await?;
  Ok(Json(Exported { json }))
}

#[derive(Debug, Deserialize)]
pub struct ImportBody {
  pub name: String,
  pub json: String,
}

/// `POST /projects/import`
pub async fn import<S>(
  State(library): State<Arc<Library<S>>>,
  Json(body): Json<ImportBody>,
) -> Result<impl IntoResponse>
where
  S: DocumentStore,
{
  require_name(&body.name)?;
  let project = library.import_project(&body.name, &body.json).await?;
  Ok((StatusCode::CREATED, Json(project)))
}
