// SPDX-License-Identifier: Apache-2.0

use crate::backend::{ProjectStore, StoreError, StoreErrorCode};
use crate::paths::{projects_path, site_config_path, site_config_tmp_path};
use async_trait::async_trait;
use greenpoint_model::{Project, SiteConfig};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

/// Flat JSON files in one data directory: `projects.json` holds an array of
/// project records, `siteConfig.json` holds the site config document.
pub struct LocalJsonStore {
    data_dir: PathBuf,
}

/// Process-wide so two stores over the same directory never share a name.
static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

impl LocalJsonStore {
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn next_tmp_path(&self) -> PathBuf {
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        site_config_tmp_path(&self.data_dir, &format!("{}-{seq}", std::process::id()))
    }
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[async_trait]
impl ProjectStore for LocalJsonStore {
    fn backend_tag(&self) -> &'static str {
        "localjson"
    }

    #[instrument(name = "store_localjson_read_projects", skip(self))]
    async fn read_projects(&self) -> Result<Vec<Project>, StoreError> {
        let path = projects_path(&self.data_dir);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| StoreError::from_io("projects read failed", &e))?;
        let projects: Vec<Project> = serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::new(StoreErrorCode::Decode, format!("projects parse failed: {e}"))
        })?;
        debug!(count = projects.len(), bytes = bytes.len(), "projects loaded");
        Ok(projects)
    }

    #[instrument(name = "store_localjson_read_config", skip(self))]
    async fn read_config(&self) -> Result<SiteConfig, StoreError> {
        let path = site_config_path(&self.data_dir);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| StoreError::from_io("site config read failed", &e))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Decode,
                format!("site config parse failed: {e}"),
            )
        })
    }

    #[instrument(name = "store_localjson_write_config", skip(self, config))]
    async fn write_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(config).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Encode,
                format!("site config encode failed: {e}"),
            )
        })?;
        // Each write stages its own file, then renames over the document:
        // readers see the old or the new document and the last rename wins.
        let tmp = self.next_tmp_path();
        let staged = match write_and_sync(&tmp, &bytes).await {
            Ok(()) => tokio::fs::rename(&tmp, site_config_path(&self.data_dir))
                .await
                .map_err(|e| StoreError::from_io("site config rename failed", &e)),
            Err(e) => Err(StoreError::from_io("site config write failed", &e)),
        };
        if let Err(err) = staged {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %tmp.display(), error = %cleanup, "staged config not removed");
                }
            }
            return Err(err);
        }
        debug!(bytes = bytes.len(), "site config replaced");
        Ok(())
    }
}
