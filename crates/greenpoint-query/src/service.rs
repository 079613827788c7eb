// SPDX-License-Identifier: Apache-2.0

use crate::neighbors::{resolve_project, ProjectDetail};
use crate::page::{filter_projects, list_projects, PageRequest, ProjectPage};
use crate::query_error::QueryError;
use greenpoint_model::{CategoryFilter, Project, ProjectId};
use greenpoint_store::ProjectStore;
use std::sync::Arc;
use tracing::debug;

/// Paginated, category-filtered listing over a fresh load of the catalog.
#[derive(Clone)]
pub struct CatalogReader {
    store: Arc<dyn ProjectStore>,
}

impl CatalogReader {
    #[must_use]
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub async fn list(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
    ) -> Result<ProjectPage, QueryError> {
        let projects = self.store.read_projects().await?;
        let result = list_projects(&projects, filter, page);
        debug!(
            backend = self.store.backend_tag(),
            loaded = projects.len(),
            total = result.meta.total,
            page = page.page(),
            limit = page.limit(),
            returned = result.items.len(),
            "catalog page computed"
        );
        Ok(result)
    }

    /// Unpaginated listing of full records.
    pub async fn list_all(&self, filter: &CategoryFilter) -> Result<Vec<Project>, QueryError> {
        let projects = self.store.read_projects().await?;
        let filtered = filter_projects(&projects, filter);
        debug!(
            backend = self.store.backend_tag(),
            loaded = projects.len(),
            returned = filtered.len(),
            "catalog listed without pagination"
        );
        Ok(filtered)
    }
}

/// Single-record lookup with cyclic next/previous neighbors.
#[derive(Clone)]
pub struct DetailResolver {
    store: Arc<dyn ProjectStore>,
}

impl DetailResolver {
    #[must_use]
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: ProjectId) -> Result<ProjectDetail, QueryError> {
        let projects = self.store.read_projects().await?;
        let detail = resolve_project(&projects, id).ok_or_else(|| QueryError::not_found(id))?;
        debug!(
            backend = self.store.backend_tag(),
            id = %id,
            next = %detail.next_project.id,
            prev = %detail.prev_project.id,
            "project resolved"
        );
        Ok(detail)
    }
}
