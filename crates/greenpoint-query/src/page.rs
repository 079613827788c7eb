// SPDX-License-Identifier: Apache-2.0

use greenpoint_model::{CategoryFilter, ListSummary, PaginationMeta, Project};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One-based page number and page size. Zero values are replaced with the
/// defaults so every constructed request is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_PAGE_SIZE } else { limit },
        }
    }

    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn limit(self) -> usize {
        self.limit
    }

    /// Half-open `[start, end)` window before clipping to the collection.
    #[must_use]
    pub fn window(self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.limit);
        (start, start.saturating_add(self.limit))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPage {
    pub items: Vec<ListSummary>,
    pub meta: PaginationMeta,
}

/// Category-filtered records in storage order, without projection.
#[must_use]
pub fn filter_projects(projects: &[Project], filter: &CategoryFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p.category.as_deref()))
        .cloned()
        .collect()
}

/// Filters, slices and projects one page. Metadata is computed from the
/// filtered collection. A page past the end is empty, not an error, and
/// `current_page` echoes the request unclamped.
#[must_use]
pub fn list_projects(
    projects: &[Project],
    filter: &CategoryFilter,
    page: PageRequest,
) -> ProjectPage {
    let filtered: Vec<&Project> = projects
        .iter()
        .filter(|p| filter.matches(p.category.as_deref()))
        .collect();
    let total = filtered.len();
    let (start, end) = page.window();
    let items = filtered[start.min(total)..end.min(total)]
        .iter()
        .map(|p| p.list_summary())
        .collect();
    ProjectPage {
        items,
        meta: PaginationMeta {
            total,
            current_page: page.page(),
            total_pages: total.div_ceil(page.limit()),
            has_more: end < total,
        },
    }
}
