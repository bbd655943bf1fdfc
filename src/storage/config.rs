use super::Result;
use crate::api::client::DEFAULT_TIMEOUT_SECS;
use crate::error::{ConfigError, StorageError};
use crate::utils::validation::{validate_base_url, validate_positive};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api/users";

/// On-disk configuration (`config.toml`). Every key is optional here;
/// `resolve` decides what is required.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub debug: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

/// Values given on the command line (or environment) that win over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    /// `Some(false)` turns off debug mode even when the file enables it
    pub debug: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub max_pages: Option<u32>,
}

/// Validated settings handed to the client and the paginator
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub debug: bool,
    pub timeout: Duration,
    pub max_pages: Option<u32>,
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::Serialize {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(config_path)
    }

    /// Write a starter config. Refuses to replace an existing file unless `force`.
    pub fn init(path: Option<PathBuf>, base_url: Option<String>, force: bool) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if config_path.exists() && !force {
            return Err(StorageError::AlreadyExists {
                path: config_path.to_string_lossy().to_string(),
            }
            .into());
        }

        let base_url = validate_base_url(Some(
            base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        ))?;

        let config = Config {
            base_url: Some(base_url),
            debug: false,
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECS),
            max_pages: None,
        };
        config.save(Some(config_path))
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = config_dir.join("reqres-client");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Merge overrides into the file values and validate the result.
    ///
    /// Fails with a `ConfigError` when the base URL is missing, empty or not
    /// an http(s) URL. This runs once, before any request.
    pub fn resolve(&self, overrides: &ConfigOverrides) -> std::result::Result<Settings, ConfigError> {
        let base_url = validate_base_url(
            overrides
                .base_url
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .or(self.base_url.as_deref()),
        )?;

        let timeout_seconds = validate_positive(
            "timeout_seconds",
            overrides.timeout_seconds.or(self.timeout_seconds),
        )?
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let max_pages = validate_positive("max_pages", overrides.max_pages.or(self.max_pages))?;

        Ok(Settings {
            base_url,
            debug: overrides.debug.unwrap_or(self.debug),
            timeout: Duration::from_secs(timeout_seconds),
            max_pages,
        })
    }
}

impl Settings {
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("base_url", self.base_url.clone()),
            ("debug", self.debug.to_string()),
            ("timeout_seconds", self.timeout.as_secs().to_string()),
            (
                "max_pages",
                self.max_pages
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "unlimited".to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, None);
        assert!(!config.debug);
        assert_eq!(config.timeout_seconds, None);
        assert_eq!(config.max_pages, None);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            base_url: Some("https://reqres.in/api/users".to_string()),
            debug: true,
            timeout_seconds: Some(5),
            max_pages: Some(10),
        };

        let written = config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");
        assert_eq!(written, config_path);

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "base_url = \"http://localhost:9000/users\"\n")
            .expect("Failed to write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:9000/users")
        );
        assert!(!config.debug);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "base_url = [unterminated").expect("Failed to write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Parse { .. }))
        ));
    }

    #[test]
    fn test_resolve_requires_base_url() {
        let result = Config::default().resolve(&ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::MissingField { .. })));

        let config = Config {
            base_url: Some("   ".to_string()),
            ..Config::default()
        };
        let result = config.resolve(&ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::MissingField { .. })));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = Config {
            base_url: Some("https://reqres.in/api/users".to_string()),
            ..Config::default()
        };
        let settings = config
            .resolve(&ConfigOverrides::default())
            .expect("Failed to resolve settings");
        assert_eq!(settings.base_url, "https://reqres.in/api/users");
        assert!(!settings.debug);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(settings.max_pages, None);
    }

    #[test]
    fn test_resolve_overrides_win() {
        let config = Config {
            base_url: Some("https://reqres.in/api/users".to_string()),
            debug: false,
            timeout_seconds: Some(60),
            max_pages: Some(100),
        };
        let overrides = ConfigOverrides {
            base_url: Some("http://localhost:8080/users".to_string()),
            debug: Some(true),
            timeout_seconds: Some(2),
            max_pages: Some(3),
        };
        let settings = config
            .resolve(&overrides)
            .expect("Failed to resolve settings");
        assert_eq!(settings.base_url, "http://localhost:8080/users");
        assert!(settings.debug);
        assert_eq!(settings.timeout, Duration::from_secs(2));
        assert_eq!(settings.max_pages, Some(3));
    }

    #[test]
    fn test_resolve_debug_override_can_disable() {
        let config = Config {
            base_url: Some("https://reqres.in/api/users".to_string()),
            debug: true,
            ..Config::default()
        };

        let settings = config
            .resolve(&ConfigOverrides::default())
            .expect("Failed to resolve settings");
        assert!(settings.debug);

        let overrides = ConfigOverrides {
            debug: Some(false),
            ..ConfigOverrides::default()
        };
        let settings = config
            .resolve(&overrides)
            .expect("Failed to resolve settings");
        assert!(!settings.debug);
    }

    #[test]
    fn test_resolve_rejects_zero_limits() {
        let config = Config {
            base_url: Some("https://reqres.in/api/users".to_string()),
            max_pages: Some(0),
            ..Config::default()
        };
        assert!(matches!(
            config.resolve(&ConfigOverrides::default()),
            Err(ConfigError::InvalidValue { .. })
        ));

        let overrides = ConfigOverrides {
            timeout_seconds: Some(0),
            ..ConfigOverrides::default()
        };
        let config = Config {
            base_url: Some("https://reqres.in/api/users".to_string()),
            ..Config::default()
        };
        assert!(config.resolve(&overrides).is_err());
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Config::init(Some(config_path.clone()), None, false).expect("Failed to init config");
        let loaded = Config::load(Some(config_path.clone())).expect("Failed to load config");
        assert_eq!(loaded.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(loaded.timeout_seconds, Some(DEFAULT_TIMEOUT_SECS));

        let again = Config::init(Some(config_path.clone()), None, false);
        assert!(matches!(
            again,
            Err(AppError::Storage(StorageError::AlreadyExists { .. }))
        ));

        Config::init(
            Some(config_path.clone()),
            Some("http://localhost:1234/users".to_string()),
            true,
        )
        .expect("Failed to overwrite config");
        let loaded = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded.base_url.as_deref(), Some("http://localhost:1234/users"));
    }
}
