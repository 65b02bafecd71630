//! madori server binary.
//!
//! Reads `madori.toml` (or the path specified with `--config`), opens the
//! data directory, and serves the JSON API under `/api`.
//!
//! # Normalizing a file offline
//!
//! To upgrade a saved project (or, with `--assets`, an asset catalog) to the
//! current schema without starting the server:
//!
//! ```
//! cargo run -p madori-server -- --normalize project_1712345678.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use madori_api::Library;
use madori_server::{load_config, normalize_file};
use madori_store_fs::FsStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Madori floor-plan server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "madori.toml")]
  config: PathBuf,

  /// Normalize this document, print it as JSON and exit.
  #[arg(long, value_name = "FILE")]
  normalize: Option<PathBuf>,

  /// Treat the `--normalize` input as an asset catalog.
  #[arg(long, requires = "normalize")]
  assets: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Helper mode: normalize a file and exit.
  if let Some(path) = cli.normalize {
    println!("{}", normalize_file(&path, cli.assets).await?);
    return Ok(());
  }

  let server_cfg = load_config(&cli.config)?;

  let store = FsStore::open(&server_cfg.data_dir).await.with_context(|| {
    format!("failed to open data directory {:?}", server_cfg.data_dir)
  })?;

  let library = Arc::new(Library::new(store));
  library
    .bootstrap()
    .await
    .context("failed to seed the asset catalog")?;

  let app = madori_server::app(library);
  let address = server_cfg.address();

  tracing::info!(data_dir = %server_cfg.data_dir.display(), "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
