//! User configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{AnimecalError, AnimecalResult};

/// Settings from `~/.config/animecal/config.toml`, overridden by `TMDB_*`
/// environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub access_token: Option<String>,
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub image_size: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> AnimecalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AnimecalError::Config("Could not determine config directory".into()))?
            .join("animecal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> AnimecalResult<Self> {
        Self::load_from(&Self::config_path()?, None)
    }

    /// Load from `path` (which need not exist) and the environment. Tests
    /// pass `env` to avoid reading the process environment.
    pub fn load_from(path: &Path, env: Option<HashMap<String, String>>) -> AnimecalResult<Self> {
        let config: AppConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("TMDB").source(env))
            .build()
            .map_err(|e| AnimecalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AnimecalError::Config(e.to_string()))?;

        Ok(config.non_empty())
    }

    /// Empty strings (e.g. `TMDB_API_KEY=`) count as unset.
    fn non_empty(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        AppConfig {
            access_token: keep(self.access_token),
            api_key: keep(self.api_key),
            language: keep(self.language),
            image_size: keep(self.image_size),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.access_token.is_some() || self.api_key.is_some()
    }

    /// Write a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> AnimecalResult<()> {
        let contents = "\
# animecal configuration
# Environment variables (TMDB_ACCESS_TOKEN, TMDB_API_KEY, ...) take precedence.

# TMDB read access token (preferred):
# access_token = \"eyJhbGciOi...\"

# Or a v3 API key:
# api_key = \"0123456789abcdef\"

# language = \"en-US\"
# image_size = \"original\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AnimecalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AnimecalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_missing_file_and_empty_env_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml"), env(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = \"from-file\"\nlanguage = \"ja-JP\"\n").unwrap();

        let config = AppConfig::load_from(&path, env(&[("TMDB_API_KEY", "from-env")])).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.language.as_deref(), Some("ja-JP"));
        assert!(config.has_credentials());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(
            &dir.path().join("config.toml"),
            env(&[("TMDB_ACCESS_TOKEN", "  ")]),
        )
        .unwrap();

        assert_eq!(config.access_token, None);
    }

    #[test]
    fn test_default_config_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        AppConfig::create_default_config(&path).unwrap();
        let config = AppConfig::load_from(&path, env(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
    }
}
