//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Browsers usually grant a single origin about 5 MiB of local storage.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the content store lives
    pub storage: StorageConfig,
    /// Rendering and export settings
    pub site: SiteOutputConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Content store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory override
    pub data_dir: Option<PathBuf>,
    /// File name of the store inside the data directory
    pub store_file: String,
    /// Maximum serialized size of the store in bytes (0 = unlimited)
    pub quota_bytes: usize,
}

/// Settings for the rendered site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOutputConfig {
    /// Export directory override
    pub export_dir: Option<PathBuf>,
    /// chrono format string for post dates
    pub date_format: String,
    /// Number of characters shown in post card excerpts
    pub excerpt_chars: usize,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
    /// Show the admin panel right after startup
    pub open_admin_on_start: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: "site_store.json".to_string(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl Default for SiteOutputConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            // Matches `toLocaleDateString('es-ES')`, e.g. 5/3/2026
            date_format: "%-d/%-m/%Y".to_string(),
            excerpt_chars: 150,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            open_admin_on_start: false,
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "sitedesk", "SiteDesk")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Self::load_from(&path)
    }

    /// Load configuration from `path`, defaults when the file is missing
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Directory holding the content store
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Full path of the content store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.store_file)
    }

    /// Directory the static site is exported into
    pub fn export_dir(&self) -> PathBuf {
        self.site
            .export_dir
            .clone()
            .unwrap_or_else(|| self.data_dir().join("site"))
    }

    /// Quota as understood by the stores
    pub fn quota(&self) -> Option<usize> {
        match self.storage.quota_bytes {
            0 => None,
            bytes => Some(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"storage": {"quota_bytes": 0}}"#).unwrap();
        assert_eq!(config.quota(), None);
        assert_eq!(config.storage.store_file, "site_store.json");
        assert_eq!(config.site.excerpt_chars, 150);
    }

    #[test]
    fn test_paths_follow_overrides() {
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(PathBuf::from("/tmp/sitedesk"));
        assert_eq!(config.store_path(), PathBuf::from("/tmp/sitedesk/site_store.json"));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/sitedesk/site"));
        assert_eq!(config.quota(), Some(DEFAULT_QUOTA_BYTES));
    }

    #[test]
    fn test_unparsable_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(AppConfig::load_from(&path).unwrap().quota(), Some(DEFAULT_QUOTA_BYTES));

        std::fs::write(&path, "{ storage").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.json"));
    }

}
