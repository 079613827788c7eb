use crate::backend::{ProjectStore, StoreError, StoreErrorCode};
use async_trait::async_trait;
use greenpoint_model::{Project, SiteConfig};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-process store for tests and local tooling.
pub struct MemoryStore {
    pub projects: Mutex<Vec<Project>>,
    pub config: Mutex<SiteConfig>,
    pub read_calls: AtomicU64,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            config: Mutex::new(SiteConfig::default()),
            read_calls: AtomicU64::new(0),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            ..Self::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    fn begin_read(&self) -> Result<(), StoreError> {
        self.read_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StoreError::new(StoreErrorCode::Io, "memory store read failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn read_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.begin_read()?;
        Ok(self.projects.lock().await.clone())
    }

    async fn read_config(&self) -> Result<SiteConfig, StoreError> {
        self.begin_read()?;
        Ok(self.config.lock().await.clone())
    }

    async fn write_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StoreError::new(
                StoreErrorCode::Io,
                "memory store write failure",
            ));
        }
        *self.config.lock().await = config.clone();
        Ok(())
    }
}
