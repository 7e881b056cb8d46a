use super::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

const MIN_BACKOFF_MS: u64 = 50;

impl Config {
    /// Load `~/.brandpulse/config.toml`, writing defaults on first run.
    ///
    /// Environment overrides are applied after the file is read and are never
    /// persisted, so keys supplied through the environment stay off disk.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let brandpulse_dir = home.join(".brandpulse");

        if !brandpulse_dir.exists() {
            fs::create_dir_all(&brandpulse_dir)
                .context("Failed to create .brandpulse directory")?;
        }

        let mut config = Self::load_from(&brandpulse_dir.join("config.toml"))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read the config at `path`, or create it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path).context("Failed to read config file")?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| ConfigError::Load(e.to_string()))
                .context("Failed to parse config file")?;
            config.config_path = path.to_path_buf();
            Ok(config)
        } else {
            let config = Self {
                config_path: path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str)
            .map_err(ConfigError::from)
            .context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text_model.trim().is_empty() {
            return Err(ConfigError::Validation("text_model must not be empty".into()));
        }
        if self.image_model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "image_model must not be empty".into(),
            ));
        }
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "api_base must be an http(s) URL, got `{}`",
                self.api_base
            )));
        }
        if self.reliability.base_backoff_ms < MIN_BACKOFF_MS {
            return Err(ConfigError::Validation(format!(
                "reliability.base_backoff_ms must be at least {MIN_BACKOFF_MS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
    use tempfile::TempDir;

    #[test]
    fn load_from_creates_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.reliability.max_retries, 0);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn load_from_reads_partial_file_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "api_key = \"from-file\"\ntext_model = \"gemini-custom\"\n\n[reliability]\nmax_retries = 2\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.text_model, "gemini-custom");
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.reliability.max_retries, 2);
        assert_eq!(config.reliability.base_backoff_ms, 500);
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "text_model = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn save_round_trips_through_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::load_from(&path).unwrap();
        config.image_model = "imagen-test".into();
        config.save().unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.image_model, "imagen-test");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_model() {
        let config = Config {
            text_model: "  ".into(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("text_model")
        ));
    }

    #[test]
    fn validate_rejects_non_http_base() {
        let config = Config {
            api_base: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_tiny_backoff() {
        let mut config = Config::default();
        config.reliability.base_backoff_ms = 10;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
