// SPDX-License-Identifier: Apache-2.0

use greenpoint_query::{QueryError, QueryErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidRequestBody,
    ProjectNotFound,
    NotFound,
    StorageUnavailable,
    Internal,
}

/// Error body. Messages are fixed strings; storage detail stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        code: ApiErrorCode,
        message: impl Into<String>,
        details: Value,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            request_id: request_id.into(),
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    #[must_use]
    pub fn project_not_found(raw_id: &str) -> Self {
        Self::new(
            ApiErrorCode::ProjectNotFound,
            "project not found",
            json!({"id": raw_id}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn projects_unavailable() -> Self {
        Self::new(
            ApiErrorCode::StorageUnavailable,
            "failed to load projects",
            json!({}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn config_unavailable() -> Self {
        Self::new(
            ApiErrorCode::StorageUnavailable,
            "failed to load site config",
            json!({}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn config_not_saved() -> Self {
        Self::new(
            ApiErrorCode::StorageUnavailable,
            "failed to save site config",
            json!({}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn invalid_body(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidRequestBody,
            "request body must be a JSON document",
            json!({"reason": reason}),
            "req-unknown",
        )
    }

    #[must_use]
    pub fn asset_not_found(path: &str) -> Self {
        Self::new(
            ApiErrorCode::NotFound,
            "asset not found",
            json!({"path": path}),
            "req-unknown",
        )
    }

    /// Maps a detail lookup failure; `raw_id` is the path segment as sent.
    #[must_use]
    pub fn from_detail_query(err: &QueryError, raw_id: &str) -> Self {
        match err.code {
            QueryErrorCode::NotFound => Self::project_not_found(raw_id),
            _ => Self::projects_unavailable(),
        }
    }
}
