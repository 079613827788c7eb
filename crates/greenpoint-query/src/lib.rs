#![forbid(unsafe_code)]
//! Catalog queries: paginated listing and cyclic neighbor resolution.
//!
//! The pure functions work over a loaded slice; the services load a fresh
//! copy from the injected store on every call.

mod neighbors;
mod page;
mod query_error;
mod service;

pub use neighbors::{resolve_project, ProjectDetail};
pub use page::{
    filter_projects, list_projects, PageRequest, ProjectPage, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
pub use query_error::{QueryError, QueryErrorCode};
pub use service::{CatalogReader, DetailResolver};

pub const CRATE_NAME: &str = "greenpoint-query";
