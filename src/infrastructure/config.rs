use crate::infrastructure::persistence::DEFAULT_STORAGE_KEY;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub storage: StorageSettings,
    pub viewport: ViewportSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub key: String,
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewportSettings {
    pub width: u32,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from("config/dashboard")
}

/// Load settings from `path` (any format the `config` crate knows, extension optional).
/// A missing file falls back to the compiled defaults.
pub fn load_dashboard_config_from(path: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("storage.key", DEFAULT_STORAGE_KEY)?
        .set_default("storage.directory", "data")?
        .set_default("viewport.width", 1280_i64)?
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
