//! JSON REST API for Madori.
//!
//! Exposes an axum [`Router`] over a [`Library`], which in turn is backed by
//! any [`madori_core::store::DocumentStore`]. TLS, auth and static file
//! serving are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let library = Arc::new(Library::new(store));
//! Router::new().nest("/api", madori_api::api_router(library))
//! ```

pub mod assets;
pub mod error;
pub mod library;
pub mod palette;
pub mod projects;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use madori_core::store::DocumentStore;
use serde::Serialize;

pub use error::{ApiError, Result};
pub use library::Library;

/// Response body of the export endpoints: the document as a JSON string.
#[derive(Debug, Serialize)]
pub struct Exported {
  pub json: String,
}

/// Build a fully-materialised API router for `library`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(library: Arc<Library<S>>) -> Router<()>
where
  S: DocumentStore + 'static,
{
  Router::new()
    // Global assets
    .route("/assets", get(assets::list::<S>).put(assets::replace::<S>))
    .route("/assets/export", get(assets::export::<S>))
    .route("/assets/import", post(assets::import::<S>))
    // Palette
    .route("/palette", get(palette::get_one::<S>).put(palette::replace::<S>))
    // Projects
    .route("/projects", get(projects::list::<S>).post(projects::create::<S>))
    .route("/projects/import", post(projects::import::<S>))
    .route(
      "/projects/{id}",
      get(projects::get_one::<S>)
        .put(projects::save_one::<S>)
        .patch(projects::rename_one::<S>)
        .delete(projects::delete_one::<S>),
    )
    .route("/projects/{id}/export", get(projects::export_one::<S>))
    .with_state(library)
}

#[cfg(test)]
mod tests {
  use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
  };
  use madori_store_fs::FsStore;
  use serde_json::{Value, json};
  use tempfile::TempDir;
  use tower::ServiceExt;

  use super::*;

  async fn app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("temp dir");
    let store = FsStore::open(dir.path()).await.expect("open store");
    (dir, api_router(Arc::new(Library::new(store))))
  }

  async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
      Some(body) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string())),
      None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }

  // ─── Assets ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn assets_default_then_replace() {
    let (_dir, app) = app().await;

    let (status, body) = send(&app, "GET", "/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(17));

    let legacy = json!([{
      "id": "a1",
      "shapes": [{ "type": "polygon", "points": [{ "x": 0, "y": 0 }] }],
    }]);
    let (status, body) = send(&app, "PUT", "/assets", Some(legacy)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["entities"][0]["layer"], "default");
    assert!(body[0].get("shapes").is_none());

    let (_, body) = send(&app, "GET", "/assets", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
  }

  #[tokio::test]
  async fn assets_put_rejects_non_array_body() {
    let (_dir, app) = app().await;
    let (status, _) = send(&app, "PUT", "/assets", Some(json!([{ "id": "a" }]))).await;
    assert_eq!(status, StatusCode::OK);

    let wrapped = json!({ "assets": [{ "id": "b" }] });
    let (status, body) = send(&app, "PUT", "/assets", Some(wrapped)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, body) = send(&app, "GET", "/assets", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], "a");

    let import = json!({ "json": r#"{"id":"c"}"#, "merge": false });
    let (status, _) = send(&app, "POST", "/assets/import", Some(import)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = send(&app, "GET", "/assets", None).await;
    assert_eq!(body[0]["id"], "a");
  }

  #[tokio::test]
  async fn assets_export_and_merge_import() {
    let (_dir, app) = app().await;

    let (status, body) = send(&app, "GET", "/assets/export", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["json"].as_str().unwrap().starts_with('['));

    let import = json!({ "json": r#"[{"id":"a_chair","name":"Stool"},{"id":"new"}]"#, "merge": true });
    let (status, body) = send(&app, "POST", "/assets/import", Some(import)).await;
    assert_eq!(status, StatusCode::OK);
    let assets = body.as_array().unwrap();
    assert_eq!(assets.len(), 18);
    assert!(assets.iter().any(|a| a["id"] == "a_chair" && a["name"] == "Stool"));
  }

  #[tokio::test]
  async fn malformed_import_is_unprocessable() {
    let (_dir, app) = app().await;
    let import = json!({ "json": "not json" });
    let (status, body) = send(&app, "POST", "/assets/import", Some(import)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
  }

  // ─── Palette ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn palette_round_trip() {
    let (_dir, app) = app().await;

    let (status, body) = send(&app, "GET", "/palette", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["colors"].as_array().map(Vec::len), Some(20));

    let palette = json!({ "colors": ["#000"], "defaults": {}, "recent": ["#111"] });
    let (status, _) = send(&app, "PUT", "/palette", Some(palette.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/palette", None).await;
    assert_eq!(body, palette);
  }

  // ─── Projects ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn project_lifecycle() {
    let (_dir, app) = app().await;

    let (status, project) =
      send(&app, "POST", "/projects", Some(json!({ "name": "Flat" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = project["id"].as_str().unwrap().to_owned();
    let uri = format!("/projects/{id}");

    let (_, list) = send(&app, "GET", "/projects", None).await;
    assert_eq!(list, json!([project]));

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "assets": [], "instances": [] }));

    let legacy = json!([{ "id": "i1", "x": 5, "y": 5, "type": "chair" }]);
    let (status, body) = send(&app, "PUT", &uri, Some(legacy)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assets"], json!([]));
    assert_eq!(body["instances"][0]["assetId"], "");

    let (status, body) =
      send(&app, "PATCH", &uri, Some(json!({ "name": "House" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "House");

    let (status, body) = send(&app, "GET", &format!("{uri}/export"), None).await;
    assert_eq!(status, StatusCode::OK);
    let exported: Value =
      serde_json::from_str(body["json"].as_str().unwrap()).unwrap();
    assert_eq!(exported["instances"][0]["id"], "i1");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = send(&app, "GET", "/projects", None).await;
    assert_eq!(list, json!([]));
  }

  #[tokio::test]
  async fn project_import_creates_project() {
    let (_dir, app) = app().await;
    let import = json!({
      "name": "Old",
      "json": r#"{"assets":[{"id":"a1","shapes":[{"type":"rect","w":10,"h":5}]}],"instances":[]}"#,
    });

    let (status, project) =
      send(&app, "POST", "/projects/import", Some(import)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project["name"], "Old");

    let uri = format!("/projects/{}", project["id"].as_str().unwrap());
    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["assets"][0]["entities"][0]["type"], "rect");
    assert_eq!(body["assets"][0]["entities"][0]["w"], 10.0);
  }

  #[tokio::test]
  async fn project_put_rejects_scalar_body() {
    let (_dir, app) = app().await;
    let (_, project) =
      send(&app, "POST", "/projects", Some(json!({ "name": "Flat" }))).await;
    let uri = format!("/projects/{}", project["id"].as_str().unwrap());

    let doc = json!({ "instances": [{ "id": "i1", "type": "text" }] });
    let (status, _) = send(&app, "PUT", &uri, Some(doc)).await;
    assert_eq!(status, StatusCode::OK);

    for scalar in [json!(42), json!("x"), json!(true), json!(null)] {
      let (status, _) = send(&app, "PUT", &uri, Some(scalar)).await;
      assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(body["instances"].as_array().map(Vec::len), Some(1));

    let import = json!({ "name": "Scalar", "json": "42" });
    let (status, _) = send(&app, "POST", "/projects/import", Some(import)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, list) = send(&app, "GET", "/projects", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
  }

  #[tokio::test]
  async fn project_errors() {
    let (_dir, app) = app().await;

    let (status, body) = send(
      &app,
      "PATCH",
      "/projects/missing",
      Some(json!({ "name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missing"));

    let (status, _) = send(&app, "GET", "/projects/bad.id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
      send(&app, "POST", "/projects", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }
}
