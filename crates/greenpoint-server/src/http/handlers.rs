// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{api_error, api_error_response};
use crate::{AppState, RequestId};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use greenpoint_api::convert::config_saved_dto;
use greenpoint_api::params::parse_list_projects_params;
use greenpoint_api::{
    ApiError, ApiErrorCode, HealthDto, ListProjectsResponseDto, ProjectDetailDto,
};
use greenpoint_model::{ProjectId, SiteConfig};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{error, info, warn};

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

pub(crate) async fn list_projects_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = parse_list_projects_params(&query);

    if state.api.legacy_unpaginated_list && !params.pagination_requested {
        return match state.catalog.list_all(&params.category).await {
            Ok(projects) => Json(projects).into_response(),
            Err(e) => {
                error!(request_id = %request_id.as_str(), error = %e, "project list failed");
                api_error(ApiError::projects_unavailable().with_request_id(request_id.0))
            }
        };
    }

    match state.catalog.list(&params.category, params.page).await {
        Ok(page) => Json(ListProjectsResponseDto::from(page)).into_response(),
        Err(e) => {
            error!(request_id = %request_id.as_str(), error = %e, "project list failed");
            api_error(ApiError::projects_unavailable().with_request_id(request_id.0))
        }
    }
}

pub(crate) async fn get_project_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Response {
    // Without a leading integer the segment cannot match any record.
    let Some(id) = ProjectId::parse(&raw_id) else {
        return api_error(ApiError::project_not_found(&raw_id).with_request_id(request_id.0));
    };
    match state.details.get(id).await {
        Ok(detail) => Json(ProjectDetailDto::from(detail)).into_response(),
        Err(e) => {
            let err = ApiError::from_detail_query(&e, &raw_id).with_request_id(request_id.0);
            if err.code == ApiErrorCode::ProjectNotFound {
                info!(request_id = %err.request_id, id = %id, "project not found");
            } else {
                error!(request_id = %err.request_id, error = %e, "project lookup failed");
            }
            api_error(err)
        }
    }
}

pub(crate) async fn get_config_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Response {
    match state.store.read_config().await {
        Ok(config) => Json(config).into_response(),
        Err(e) => {
            error!(request_id = %request_id.as_str(), error = %e, "site config read failed");
            api_error(ApiError::config_unavailable().with_request_id(request_id.0))
        }
    }
}

pub(crate) async fn post_config_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let document = match body {
        Ok(Json(document)) => document,
        Err(rejection) => {
            warn!(
                request_id = %request_id.as_str(),
                reason = %rejection.body_text(),
                "site config body rejected"
            );
            return api_error_response(
                rejection.status(),
                ApiError::invalid_body(&rejection.body_text()).with_request_id(request_id.0),
            );
        }
    };
    if !document.is_object() {
        warn!(request_id = %request_id.as_str(), "site config body is not an object");
        return api_error(
            ApiError::invalid_body("top-level value must be an object")
                .with_request_id(request_id.0),
        );
    }
    match state.store.write_config(&SiteConfig::new(document)).await {
        Ok(()) => {
            info!(request_id = %request_id.as_str(), "site config replaced");
            Json(config_saved_dto()).into_response()
        }
        Err(e) => {
            error!(request_id = %request_id.as_str(), error = %e, "site config write failed");
            api_error(ApiError::config_not_saved().with_request_id(request_id.0))
        }
    }
}
