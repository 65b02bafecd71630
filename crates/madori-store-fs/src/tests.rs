//! Integration tests for `FsStore` against a temporary directory.

use madori_core::{
  project::ProjectId,
  store::{DocumentKey, DocumentStore},
};
use tempfile::TempDir;

use crate::{Error, FsStore};

async fn store() -> (TempDir, FsStore) {
  let dir = TempDir::new().expect("temp dir");
  let store = FsStore::open(dir.path()).await.expect("open store");
  (dir, store)
}

fn project(id: &str) -> DocumentKey {
  DocumentKey::Project(ProjectId::parse(id).unwrap())
}

// ─── Open ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn open_creates_missing_directory() {
  let dir = TempDir::new().unwrap();
  let root = dir.path().join("nested").join("data");

  let store = FsStore::open(&root).await.unwrap();
  assert!(root.is_dir());
  assert_eq!(store.root(), root);
}

#[tokio::test]
async fn open_rejects_a_file() {
  let dir = TempDir::new().unwrap();
  let file = dir.path().join("data");
  std::fs::write(&file, b"").unwrap();

  let result = FsStore::open(&file).await;
  assert!(matches!(result, Err(Error::Io { .. } | Error::NotADirectory(_))));
}

// ─── Read / write ────────────────────────────────────────────────────────────

#[tokio::test]
async fn read_missing_returns_none() {
  let (_dir, s) = store().await;
  assert!(s.read(DocumentKey::Palette).await.unwrap().is_none());
  assert!(s.read(project("123")).await.unwrap().is_none());
}

#[tokio::test]
async fn write_then_read() {
  let (_dir, s) = store().await;
  s.write(DocumentKey::GlobalAssets, b"[]".to_vec()).await.unwrap();

  let bytes = s.read(DocumentKey::GlobalAssets).await.unwrap();
  assert_eq!(bytes.as_deref(), Some(&b"[]"[..]));
  assert!(s.path_for(&DocumentKey::GlobalAssets).ends_with("global_assets.json"));
}

#[tokio::test]
async fn write_replaces_whole_document() {
  let (_dir, s) = store().await;
  let key = project("p1");

  s.write(key.clone(), b"{\"instances\":[1,2,3,4,5]}".to_vec())
    .await
    .unwrap();
  s.write(key.clone(), b"{}".to_vec()).await.unwrap();

  assert_eq!(s.read(key).await.unwrap().unwrap(), b"{}");
}

#[tokio::test]
async fn write_leaves_no_temp_file() {
  let (dir, s) = store().await;
  s.write(DocumentKey::ProjectsIndex, b"[]".to_vec()).await.unwrap();

  let names: Vec<_> = std::fs::read_dir(dir.path())
    .unwrap()
    .map(|e| e.unwrap().file_name().into_string().unwrap())
    .collect();
  assert_eq!(names, ["projects_index.json"]);
}

#[tokio::test]
async fn failed_write_keeps_previous_version() {
  let (dir, s) = store().await;
  let key = project("p1");
  s.write(key.clone(), b"{\"v\":1}".to_vec()).await.unwrap();

  // Occupy the temp path with a directory so the write cannot proceed.
  std::fs::create_dir(dir.path().join("project_p1.json.tmp")).unwrap();

  let result = s.write(key.clone(), b"{\"v\":2}".to_vec()).await;
  assert!(matches!(result, Err(Error::Io { .. })));
  assert_eq!(s.read(key).await.unwrap().unwrap(), b"{\"v\":1}");
}

// ─── Remove ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_reports_whether_anything_was_deleted() {
  let (_dir, s) = store().await;
  let key = project("gone");

  assert!(!s.remove(key.clone()).await.unwrap());
  s.write(key.clone(), b"{}".to_vec()).await.unwrap();
  assert!(s.remove(key.clone()).await.unwrap());
  assert!(s.read(key).await.unwrap().is_none());
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_never_interleave() {
  let (_dir, s) = store().await;
  let key = DocumentKey::GlobalAssets;

  let docs: Vec<Vec<u8>> = (0..16)
    .map(|i| serde_json::to_vec(&vec![i; 2048]).unwrap())
    .collect();

  let mut tasks = Vec::new();
  for doc in docs.clone() {
    let s = s.clone();
    let key = key.clone();
    tasks.push(tokio::spawn(async move { s.write(key, doc).await }));
  }
  for _ in 0..16 {
    let s = s.clone();
    let key = key.clone();
    tasks.push(tokio::spawn(async move {
      if let Some(bytes) = s.read(key).await? {
        let parsed: serde_json::Value =
          serde_json::from_slice(&bytes).expect("reader saw a torn write");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2048));
      }
      Ok::<(), Error>(())
    }));
  }
  for task in tasks {
    task.await.unwrap().unwrap();
  }

  let last = s.read(key).await.unwrap().unwrap();
  assert!(docs.contains(&last));
}
