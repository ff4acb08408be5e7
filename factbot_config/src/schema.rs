use std::path::{Path, PathBuf};

use anyhow::Context;
use factbot_wiki::WikiConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

const CONFIG_DIR: &str = "factbot";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub wiki: WikiConfig,
    /// Default tracing filter, overridden by `RUST_LOG`.
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wiki: WikiConfig::default(),
            log_level: Self::default_log_level(),
        }
    }
}

impl Config {
    fn default_log_level() -> String {
        "warn".to_string()
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `~/factbot/config.json`, or the defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::write_template(&config_path)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Configuration options:");
        println!("   - wiki.api_url: MediaWiki API endpoint to query");
        println!("   - wiki.timeout: request timeout in seconds");
        println!("   - wiki.max_size: largest accepted response in bytes");
        println!("   - log_level: tracing filter (RUST_LOG takes precedence)");
        println!();
        println!("Run 'factbot chat' to start asking questions.");
        Ok(())
    }

    /// Write the default configuration to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("factbot-config-{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn defaults_are_complete() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.wiki, WikiConfig::default());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let Ok(config) = serde_json::from_str::<Config>("{}") else {
            panic!("empty config should deserialize");
        };
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let path = scratch("partial.json");
        let written = std::fs::write(&path, r#"{"log_level":"debug","wiki":{"timeout":30}}"#);
        assert!(written.is_ok());

        let Ok(config) = Config::load_from(&path) else {
            panic!("partial config should load");
        };
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.wiki.timeout, 30);
        assert_eq!(config.wiki.api_url, WikiConfig::default().api_url);
    }

    #[test]
    fn template_round_trips_and_is_not_overwritten() {
        let path = scratch("template.json");
        assert!(Config::write_template(&path).is_ok());

        let Ok(config) = Config::load_from(&path) else {
            panic!("template should load");
        };
        assert_eq!(config, Config::default());

        assert!(Config::write_template(&path).is_err());
    }

    #[test]
    fn invalid_json_is_reported() {
        let path = scratch("broken.json");
        assert!(std::fs::write(&path, "{ not json").is_ok());

        let Err(err) = Config::load_from(&path) else {
            panic!("broken config should fail");
        };
        assert!(err.to_string().contains("Invalid config file"));
    }
}
