use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    /// Exact origins allowed by CORS; `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
    pub uploads_dir: PathBuf,
    pub asset_cache_ttl: Duration,
    /// Serve full, unpaginated records when a list request has no `page`
    /// and no `limit`.
    pub legacy_unpaginated_list: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            cors_allowed_origins: vec![DEFAULT_CLIENT_ORIGIN.to_string()],
            uploads_dir: PathBuf::from("public/uploads"),
            asset_cache_ttl: Duration::from_secs(3600),
            legacy_unpaginated_list: false,
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig, bind_addr: &str) -> Result<(), String> {
    if bind_addr.trim().is_empty() {
        return Err("bind address must not be empty".to_string());
    }
    if api.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if api.cors_allowed_origins.iter().any(|o| o.trim().is_empty()) {
        return Err("cors origins must not contain empty entries".to_string());
    }
    Ok(())
}
