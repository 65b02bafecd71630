//! HTTP server wiring for Madori.
//!
//! Configuration loading, the top-level [`Router`], and the offline
//! normalizer used by the binary's `--normalize` helper mode.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use madori_api::Library;
use madori_core::store::DocumentStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `madori.toml` and
/// `MADORI_*` environment variables. Every field is optional.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:     String,
  pub port:     u16,
  /// Directory holding the JSON documents. A leading `~/` is expanded.
  pub data_dir: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:     "127.0.0.1".to_owned(),
      port:     8080,
      data_dir: PathBuf::from("./data"),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Layer the optional config file at `path` with `MADORI_*` environment
/// variables.
pub fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("MADORI"))
    .build()
    .with_context(|| format!("failed to read config file {}", path.display()))?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  server_cfg.data_dir = expand_tilde(&server_cfg.data_dir);
  Ok(server_cfg)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// The application: the JSON API under `/api`, with request tracing.
pub fn app<S>(library: Arc<Library<S>>) -> Router
where
  S: DocumentStore + 'static,
{
  Router::new()
    .nest("/api", madori_api::api_router(library))
    .layer(TraceLayer::new_for_http())
}

// ─── Offline normalization ───────────────────────────────────────────────────

/// Normalize the document at `path` and render it as pretty JSON. With
/// `assets`, the file is read as an asset catalog instead of a project.
pub async fn normalize_file(path: &Path, assets: bool) -> anyhow::Result<String> {
  let bytes = tokio::fs::read(path)
    .await
    .with_context(|| format!("failed to read {}", path.display()))?;

  let rendered = if assets {
    let assets = madori_schema::normalize_assets(&bytes)
      .with_context(|| format!("{} is not JSON", path.display()))?;
    serde_json::to_string_pretty(&assets)?
  } else {
    let data = madori_schema::normalize(&bytes)
      .with_context(|| format!("{} is not JSON", path.display()))?;
    serde_json::to_string_pretty(&data)?
  };
  Ok(rendered)
}
