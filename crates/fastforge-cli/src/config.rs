//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config <path>` or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use fastforge_core::domain::{DEFAULT_PYTHON_VERSION, PackageManager};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Package manager name: "uv" or "poetry".
    pub package_manager: Option<String>,
    /// Python version written into generated manifests.
    pub python_version: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package_manager: Some(PackageManager::Uv.as_str().into()),
            python_version: Some(DEFAULT_PYTHON_VERSION.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location). A missing default file is fine; a
    /// missing explicit file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file '{}' does not exist", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    /// The configured default package manager, if it names a known one.
    pub fn default_package_manager(&self) -> Option<PackageManager> {
        self.defaults
            .package_manager
            .as_deref()
            .and_then(|s| s.parse().ok())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fastforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "fastforge", "fastforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fastforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_package_manager_is_uv() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_package_manager(), Some(PackageManager::Uv));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.defaults.python_version.as_deref(), Some("3.11"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/fastforge.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\npackage_manager = \"poetry\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.default_package_manager(), Some(PackageManager::Poetry));
        assert_eq!(cfg.defaults.python_version.as_deref(), Some("3.11"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn unknown_manager_name_yields_none() {
        let cfg = AppConfig {
            defaults: Defaults {
                package_manager: Some("pipenv".into()),
                python_version: None,
            },
            output: OutputConfig::default(),
        };
        assert_eq!(cfg.default_package_manager(), None);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
