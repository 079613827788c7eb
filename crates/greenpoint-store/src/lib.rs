#![forbid(unsafe_code)]

mod backend;
mod local;
mod memory;
pub mod paths;

pub use backend::{ProjectStore, StoreError, StoreErrorCode};
pub use local::LocalJsonStore;
pub use memory::MemoryStore;

pub const CRATE_NAME: &str = "greenpoint-store";
