// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use greenpoint_model::{Project, SiteConfig};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    NotFound,
    Io,
    Decode,
    Encode,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Io => "io_error",
            Self::Decode => "decode_error",
            Self::Encode => "encode_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn from_io(context: &str, err: &std::io::Error) -> Self {
        let code = if err.kind() == std::io::ErrorKind::NotFound {
            StoreErrorCode::NotFound
        } else {
            StoreErrorCode::Io
        };
        Self::new(code, format!("{context}: {err}"))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Loads and persists the catalog documents. Every call goes to the backing
/// storage; implementations keep no cache between calls.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    /// Full collection in storage order. Order defines next/previous adjacency.
    async fn read_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn read_config(&self) -> Result<SiteConfig, StoreError>;
    /// Replaces the whole document. Last writer wins.
    async fn write_config(&self, config: &SiteConfig) -> Result<(), StoreError>;
}
