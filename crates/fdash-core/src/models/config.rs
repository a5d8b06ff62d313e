//! Configuration structures for the dashboard pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FdashError, Result};

/// Main configuration for fdash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FdashConfig {
    /// Analysis service configuration.
    pub api: ApiConfig,

    /// Dashboard display limits.
    pub display: DisplayConfig,
}

/// Analysis service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the analysis service.
    pub base_url: String,

    /// Request timeout in seconds. The multi-agent pipeline is slow.
    pub timeout_secs: u64,

    /// Industry sent when none is given.
    pub default_industry: String,

    /// Target market sent when none is given.
    pub default_target_market: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 180,
            default_industry: "general".to_string(),
            default_target_market: "global".to_string(),
        }
    }
}

/// Caps applied when turning signals into dashboard panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Bullets shown in the overview highlights card.
    pub highlight_limit: usize,

    /// Bullets shown in any other list.
    pub bullet_list_limit: usize,

    /// Data points shown per grid.
    pub data_point_limit: usize,

    /// Characters of the idea kept in the dashboard title.
    pub idea_title_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_limit: 8,
            bullet_list_limit: 12,
            data_point_limit: 24,
            idea_title_limit: 80,
        }
    }
}

impl FdashConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FdashError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FdashError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
