//! [`Library`]: the document operations behind the HTTP API.
//!
//! Everything read back from the store goes through the normalizer, so callers
//! only ever see current-schema values. Everything written is the normalized
//! form, pretty-printed.

use std::collections::HashMap;

use madori_core::{
  asset::Asset,
  catalog::{default_assets, default_palette},
  palette::Palette,
  project::{Project, ProjectData, ProjectId},
  store::{DocumentKey, DocumentStore},
};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::{ApiError, Result};

/// Project, asset-catalog and palette operations over a [`DocumentStore`].
pub struct Library<S> {
  store:       S,
  /// Serializes read-modify-write sequences (the projects index, asset
  /// merges). The store's own lock only covers single operations.
  update_lock: Mutex<()>,
}

impl<S: DocumentStore> Library<S> {
  pub fn new(store: S) -> Self {
    Self {
      store,
      update_lock: Mutex::new(()),
    }
  }

  pub fn store(&self) -> &S { &self.store }

  async fn read(&self, key: DocumentKey) -> Result<Option<Vec<u8>>> {
    self.store.read(key).await.map_err(ApiError::store)
  }

  async fn write_json<T>(&self, key: DocumentKey, value: &T) -> Result<()>
  where
    T: Serialize + Sync + ?Sized,
  {
    let bytes = serde_json::to_vec_pretty(value)?;
    self.store.write(key, bytes).await.map_err(ApiError::store)
  }

  /// Seed the global asset catalog with the built-in defaults if it has never
  /// been written.
  pub async fn bootstrap(&self) -> Result<()> {
    let _guard = self.update_lock.lock().await;
    if self.read(DocumentKey::GlobalAssets).await?.is_none() {
      let assets = default_assets();
      self.write_json(DocumentKey::GlobalAssets, &assets).await?;
      info!(count = assets.len(), "seeded default asset catalog");
    }
    Ok(())
  }

  // ─── Global assets ─────────────────────────────────────────────────────────

  pub async fn get_assets(&self) -> Result<Vec<Asset>> {
    match self.read(DocumentKey::GlobalAssets).await? {
      Some(bytes) => Ok(madori_schema::normalize_assets(&bytes)?),
      None => Ok(default_assets()),
    }
  }

  pub async fn save_assets(&self, assets: &[Asset]) -> Result<()> {
    let _guard = self.update_lock.lock().await;
    self.write_assets(assets).await
  }

  /// Normalize a catalog of any generation and store it. `raw` must be an
  /// array.
  pub async fn replace_assets(&self, raw: &Value) -> Result<Vec<Asset>> {
    require_catalog(raw)?;
    let assets = madori_schema::normalize_asset_value(raw);
    self.save_assets(&assets).await?;
    Ok(assets)
  }

  /// Caller holds `update_lock`.
  async fn write_assets(&self, assets: &[Asset]) -> Result<()> {
    self.write_json(DocumentKey::GlobalAssets, assets).await?;
    info!(count = assets.len(), "global assets saved");
    Ok(())
  }

  /// The global catalog as a compact JSON string.
  pub async fn export_assets(&self) -> Result<String> {
    let assets = self.get_assets().await?;
    Ok(serde_json::to_string(&assets)?)
  }

  /// Import an asset catalog of any generation.
  ///
  /// With `merge`, imported assets replace existing ones with the same id and
  /// the rest are appended; otherwise the catalog is replaced outright.
  pub async fn import_assets(
    &self,
    json: &str,
    merge: bool,
  ) -> Result<Vec<Asset>> {
    let raw: Value =
      serde_json::from_str(json).map_err(madori_schema::Error::from)?;
    require_catalog(&raw)?;
    let incoming = madori_schema::normalize_asset_value(&raw);

    let _guard = self.update_lock.lock().await;
    let assets = if merge {
      let mut current = self.get_assets().await?;
      merge_assets(&mut current, incoming);
      current
    } else {
      incoming
    };
    self.write_assets(&assets).await?;
    Ok(assets)
  }

  // ─── Palette ───────────────────────────────────────────────────────────────

  /// The stored palette. A missing palette is replaced by the default, which
  /// is persisted on a best-effort basis.
  pub async fn get_palette(&self) -> Result<Palette> {
    match self.read(DocumentKey::Palette).await? {
      Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
      None => {
        let palette = default_palette();
        if let Err(error) = self.write_json(DocumentKey::Palette, &palette).await
        {
          warn!(%error, "could not persist default palette");
        }
        Ok(palette)
      }
    }
  }

  pub async fn save_palette(&self, palette: &Palette) -> Result<()> {
    self.write_json(DocumentKey::Palette, palette).await?;
    info!(colors = palette.colors.len(), "palette saved");
    Ok(())
  }

  // ─── Projects index ────────────────────────────────────────────────────────

  /// All known projects. A missing or unreadable index is an empty list.
  pub async fn list_projects(&self) -> Result<Vec<Project>> {
    let Some(bytes) = self.read(DocumentKey::ProjectsIndex).await? else {
      return Ok(Vec::new());
    };
    match serde_json::from_slice(&bytes) {
      Ok(projects) => Ok(projects),
      Err(error) => {
        warn!(%error, "projects index is unreadable, treating it as empty");
        Ok(Vec::new())
      }
    }
  }

  /// Apply `update` to the index entry for `id` and persist the index.
  /// Returns the updated entry, or `None` if the index has no such project.
  async fn update_index_entry<F>(
    &self,
    id: &ProjectId,
    update: F,
  ) -> Result<Option<Project>>
  where
    F: FnOnce(&mut Project) + Send,
  {
    let _guard = self.update_lock.lock().await;
    let mut projects = self.list_projects().await?;
    let Some(project) = projects.iter_mut().find(|p| p.id == id.as_str())
    else {
      return Ok(None);
    };
    update(project);
    let updated = project.clone();
    self.write_json(DocumentKey::ProjectsIndex, &projects).await?;
    Ok(Some(updated))
  }

  // ─── Projects ──────────────────────────────────────────────────────────────

  pub async fn create_project(&self, name: &str) -> Result<Project> {
    let id = ProjectId::generate();
    let project = Project::new(&id, name);
    {
      let _guard = self.update_lock.lock().await;
      let mut projects = self.list_projects().await?;
      projects.push(project.clone());
      self.write_json(DocumentKey::ProjectsIndex, &projects).await?;
    }
    self
      .write_json(DocumentKey::Project(id), &ProjectData::default())
      .await?;

    info!(id = %project.id, name = %project.name, "project created");
    Ok(project)
  }

  /// The normalized contents of a project. A project that has never been
  /// saved is empty.
  pub async fn get_project(&self, id: &str) -> Result<ProjectData> {
    let id = ProjectId::parse(id)?;
    let bytes = self.read(DocumentKey::Project(id)).await?;
    Ok(madori_schema::normalize_optional(bytes.as_deref())?)
  }

  /// Normalize `raw`, persist it and bump the project's `updatedAt`.
  pub async fn save_project(&self, id: &str, raw: &Value) -> Result<ProjectData> {
    let id = ProjectId::parse(id)?;
    require_document(raw)?;
    let data = madori_schema::normalize_value(raw);
    self.put_project(&id, &data).await?;
    Ok(data)
  }

  async fn put_project(&self, id: &ProjectId, data: &ProjectData) -> Result<()> {
    self.write_json(DocumentKey::Project(id.clone()), data).await?;
    if self.update_index_entry(id, Project::touch).await?.is_none() {
      warn!(%id, "saved project is not in the projects index");
    }
    let orphans = data.instances.iter().filter(|i| i.is_orphan()).count();
    if orphans > 0 {
      warn!(%id, orphans, "project has non-text instances without an asset");
    }
    info!(
      %id,
      assets = data.local_assets.len(),
      instances = data.instances.len(),
      "project saved"
    );
    Ok(())
  }

  pub async fn delete_project(&self, id: &str) -> Result<()> {
    let id = ProjectId::parse(id)?;
    {
      let _guard = self.update_lock.lock().await;
      let mut projects = self.list_projects().await?;
      projects.retain(|p| p.id != id.as_str());
      self.write_json(DocumentKey::ProjectsIndex, &projects).await?;
    }
    if let Err(error) = self.store.remove(DocumentKey::Project(id.clone())).await
    {
      warn!(%id, %error, "could not remove project file");
    }

    info!(%id, "project deleted");
    Ok(())
  }

  pub async fn rename_project(&self, id: &str, name: &str) -> Result<Project> {
    let id = ProjectId::parse(id)?;
    let name = name.to_owned();
    let project = self
      .update_index_entry(&id, |p| {
        p.name = name;
        p.touch();
      })
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("project {id}")))?;

    info!(%id, name = %project.name, "project renamed");
    Ok(project)
  }

  /// The normalized project as a compact JSON string.
  pub async fn export_project(&self, id: &str) -> Result<String> {
    let data = self.get_project(id).await?;
    Ok(serde_json::to_string(&data)?)
  }

  /// Create a project named `name` from a document of any generation.
  ///
  /// The document is normalized before the project is created, so input that
  /// is not a JSON object or array creates nothing. If saving the contents
  /// fails the new project is deleted again.
  pub async fn import_project(&self, name: &str, json: &str) -> Result<Project> {
    let raw: Value =
      serde_json::from_str(json).map_err(madori_schema::Error::from)?;
    require_document(&raw)?;
    let data = madori_schema::normalize_value(&raw);
    let project = self.create_project(name).await?;
    let id = ProjectId::parse(&project.id)?;

    if let Err(error) = self.put_project(&id, &data).await {
      if let Err(cleanup) = self.delete_project(&project.id).await {
        warn!(%id, error = %cleanup, "could not roll back failed import");
      }
      return Err(error);
    }

    info!(%id, name = %project.name, "project imported");
    Ok(project)
  }
}

fn require_catalog(raw: &Value) -> Result<()> {
  if !raw.is_array() {
    return Err(ApiError::BadRequest(
      "asset catalog must be a JSON array".to_owned(),
    ));
  }
  Ok(())
}

/// A project write must have the shape of some project generation: an object
/// or a bare instance array.
fn require_document(raw: &Value) -> Result<()> {
  if !(raw.is_object() || raw.is_array()) {
    return Err(ApiError::BadRequest(
      "project data must be a JSON object or array".to_owned(),
    ));
  }
  Ok(())
}

/// Replace assets in `current` that share an id with one in `incoming`, and
/// append the rest in order.
fn merge_assets(current: &mut Vec<Asset>, incoming: Vec<Asset>) {
  let mut index: HashMap<String, usize> = current
    .iter()
    .enumerate()
    .map(|(i, a)| (a.id.clone(), i))
    .collect();

  for asset in incoming {
    match index.get(&asset.id) {
      Some(&i) => current[i] = asset,
      None => {
        index.insert(asset.id.clone(), current.len());
        current.push(asset);
      }
    }
  }
}
