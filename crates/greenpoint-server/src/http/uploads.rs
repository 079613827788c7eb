// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error;
use crate::{AppState, RequestId};
use axum::extract::{Path as UrlPath, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use greenpoint_api::{ApiError, ApiErrorCode};
use serde_json::json;
use std::path::{Component, Path, PathBuf};
use tracing::{error, warn};

/// Joins a URL path onto the uploads root. Only plain file-name components
/// are accepted, so `..`, absolute paths and drive prefixes never resolve.
pub(crate) fn resolve_asset_path(root: &Path, raw: &str) -> Option<PathBuf> {
    let relative = Path::new(raw.trim_start_matches('/'));
    let mut out = root.to_path_buf();
    let mut parts = 0_usize;
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                out.push(part);
                parts += 1;
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    (parts > 0).then_some(out)
}

pub(crate) fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Symlinks inside the uploads directory must not point outside it.
async fn within_root(root: &Path, path: &Path) -> bool {
    let Ok(root) = tokio::fs::canonicalize(root).await else {
        return false;
    };
    match tokio::fs::canonicalize(path).await {
        Ok(resolved) => resolved.starts_with(&root),
        Err(_) => false,
    }
}

pub(crate) async fn uploads_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    UrlPath(raw): UrlPath<String>,
) -> Response {
    let not_found =
        || api_error(ApiError::asset_not_found(&raw).with_request_id(request_id.as_str()));
    let Some(path) = resolve_asset_path(&state.api.uploads_dir, &raw) else {
        warn!(request_id = %request_id.as_str(), path = %raw, "asset path rejected");
        return not_found();
    };
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return not_found(),
    }
    if !within_root(&state.api.uploads_dir, &path).await {
        warn!(request_id = %request_id.as_str(), path = %raw, "asset escapes uploads root");
        return not_found();
    }
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(request_id = %request_id.as_str(), path = %raw, error = %e, "asset read failed");
            return api_error(ApiError::new(
                ApiErrorCode::Internal,
                "asset read failed",
                json!({}),
                request_id.as_str(),
            ));
        }
    };
    let mut resp = (StatusCode::OK, bytes).into_response();
    let headers = resp.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&path)),
    );
    if let Ok(value) = HeaderValue::from_str(&format!(
        "public, max-age={}",
        state.api.asset_cache_ttl.as_secs()
    )) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    resp
}
