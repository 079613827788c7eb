// SPDX-License-Identifier: Apache-2.0

use greenpoint_model::{ListSummary, NeighborSummary, PaginationMeta, Project};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListProjectsResponseDto {
    pub data: Vec<ListSummary>,
    pub meta: PaginationMeta,
}

/// Full record with the neighbor references merged in at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailDto {
    #[serde(flatten)]
    pub project: Project,
    pub next_project: NeighborSummary,
    pub prev_project: NeighborSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSavedDto {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthDto {
    pub status: String,
}
