// SPDX-License-Identifier: Apache-2.0

use greenpoint_model::CategoryFilter;
use greenpoint_query::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProjectsParams {
    pub category: CategoryFilter,
    pub page: PageRequest,
    /// True when the request carried `page` or `limit` at all, valid or not.
    pub pagination_requested: bool,
}

/// Never fails: missing or unusable `page`/`limit` resolve to their defaults.
#[must_use]
pub fn parse_list_projects_params(query: &BTreeMap<String, String>) -> ListProjectsParams {
    let page = query
        .get("page")
        .and_then(|raw| parse_positive(raw))
        .unwrap_or(DEFAULT_PAGE);
    let limit = query
        .get("limit")
        .and_then(|raw| parse_positive(raw))
        .unwrap_or(DEFAULT_PAGE_SIZE);
    ListProjectsParams {
        category: CategoryFilter::from_param(query.get("category").map(String::as_str)),
        page: PageRequest::new(page, limit),
        pagination_requested: query.contains_key("page") || query.contains_key("limit"),
    }
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|v| *v > 0)
}
