use std::path::PathBuf;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// CLI configuration, read from `config.toml` under the user config dir.
/// Missing file or missing keys fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Base URL of the objectives API.
    pub api_base_url: String,
    /// Role id of the current user; there is no auth flow.
    pub user_id: String,
    /// Objectives per page in list output.
    pub page_size: usize,
    /// Default reporting year; the current year when unset.
    pub year: Option<i32>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            user_id: "gs6368".to_string(),
            page_size: 6,
            year: None,
        }
    }
}

impl CliConfig {
    pub fn default_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("okra").join("config.toml"))
}

pub fn load_config() -> anyhow::Result<CliConfig> {
    let Some(path) = config_path() else {
        return Ok(CliConfig::default());
    };
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
