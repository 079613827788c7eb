use std::path::{Path, PathBuf};

pub const PROJECTS_FILE: &str = "projects.json";
pub const SITE_CONFIG_FILE: &str = "siteConfig.json";
pub const TMP_SUFFIX: &str = ".tmp";

#[must_use]
pub fn projects_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PROJECTS_FILE)
}

#[must_use]
pub fn site_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SITE_CONFIG_FILE)
}

/// Staging file for one config write. `writer` must be unique among
/// in-flight writes so overlapping writers never share a staging file.
#[must_use]
pub fn site_config_tmp_path(data_dir: &Path, writer: &str) -> PathBuf {
    data_dir.join(format!("{SITE_CONFIG_FILE}.{writer}{TMP_SUFFIX}"))
}
