use serde::{Deserialize, Serialize};

/// Category value the frontend sends to mean "do not filter".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Any,
    Exact(String),
}

impl CategoryFilter {
    /// Absent, empty and the `All` sentinel all mean no filter. Matching is
    /// case-sensitive.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(ALL_CATEGORIES) => Self::Any,
            Some(value) => Self::Exact(value.to_string()),
        }
    }

    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaginationMeta {
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_more: bool,
}
