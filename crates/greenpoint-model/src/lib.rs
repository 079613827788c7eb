#![forbid(unsafe_code)]
//! Catalog data model: project records, their derived projections and the
//! opaque site configuration document.

mod catalog;
mod config;
mod project;
mod serde_helpers;

pub use catalog::{CategoryFilter, PaginationMeta, ALL_CATEGORIES};
pub use config::SiteConfig;
pub use project::{ListSummary, NeighborSummary, Project, ProjectId, ProjectYear};
pub use serde_helpers::Nullable;

pub const CRATE_NAME: &str = "greenpoint-model";
