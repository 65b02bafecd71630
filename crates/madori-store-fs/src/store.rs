//! [`FsStore`]: the file-system implementation of [`DocumentStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Arc,
};

use madori_core::store::{DocumentKey, DocumentStore};
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

use crate::{Error, Result};

const EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A document store backed by one directory of JSON files.
///
/// Every read, write and remove holds the same lock, so a reader never sees a
/// half-written file and writers never interleave. Writes go to a sibling
/// `.json.tmp` file which is then renamed over the target; if anything fails
/// the previous document is left as it was.
///
/// Cloning is cheap; clones share the lock.
#[derive(Clone)]
pub struct FsStore {
  root: Arc<PathBuf>,
  lock: Arc<Mutex<()>>,
}

impl FsStore {
  /// Open (or create) a store rooted at `root`.
  pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
    let root = root.as_ref().to_path_buf();
    fs::create_dir_all(&root)
      .await
      .map_err(|e| Error::io(&root, e))?;

    let meta = fs::metadata(&root).await.map_err(|e| Error::io(&root, e))?;
    if !meta.is_dir() {
      return Err(Error::NotADirectory(root));
    }

    Ok(Self {
      root: Arc::new(root),
      lock: Arc::new(Mutex::new(())),
    })
  }

  pub fn root(&self) -> &Path { &self.root }

  /// The file a document lives in.
  pub fn path_for(&self, key: &DocumentKey) -> PathBuf {
    self.root.join(format!("{}.{EXTENSION}", key.stem()))
  }

  fn temp_path_for(&self, key: &DocumentKey) -> PathBuf {
    self.root.join(format!("{}.{TEMP_EXTENSION}", key.stem()))
  }
}

// ─── DocumentStore impl ──────────────────────────────────────────────────────

impl DocumentStore for FsStore {
  type Error = Error;

  async fn read(&self, key: DocumentKey) -> Result<Option<Vec<u8>>> {
    let path = self.path_for(&key);
    let _guard = self.lock.lock().await;

    match fs::read(&path).await {
      Ok(bytes) => Ok(Some(bytes)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(Error::io(path, e)),
    }
  }

  async fn write(&self, key: DocumentKey, bytes: Vec<u8>) -> Result<()> {
    let path = self.path_for(&key);
    let temp = self.temp_path_for(&key);
    let _guard = self.lock.lock().await;

    if let Err(e) = fs::write(&temp, &bytes).await {
      discard(&temp).await;
      return Err(Error::io(temp, e));
    }
    if let Err(e) = fs::rename(&temp, &path).await {
      discard(&temp).await;
      return Err(Error::io(path, e));
    }

    debug!(%key, len = bytes.len(), "document written");
    Ok(())
  }

  async fn remove(&self, key: DocumentKey) -> Result<bool> {
    let path = self.path_for(&key);
    let _guard = self.lock.lock().await;

    match fs::remove_file(&path).await {
      Ok(()) => Ok(true),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
      Err(e) => Err(Error::io(path, e)),
    }
  }
}

/// Best-effort cleanup of a temp file left by a failed write.
async fn discard(temp: &Path) {
  if let Err(e) = fs::remove_file(temp).await
    && e.kind() != ErrorKind::NotFound
  {
    warn!(path = %temp.display(), error = %e, "could not remove temp file");
  }
}
