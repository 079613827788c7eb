#![forbid(unsafe_code)]

pub mod convert;
pub mod dto;
pub mod error_mapping;
pub mod errors;
pub mod params;

pub use dto::{ConfigSavedDto, HealthDto, ListProjectsResponseDto, ProjectDetailDto};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "greenpoint-api";
pub const CONFIG_SAVED_MESSAGE: &str = "site config updated";
