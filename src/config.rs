// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ConfigError;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketbook", "pocketbook"));

pub const ENV_API_URL: &str = "POCKETBOOK_API_URL";
pub const ENV_USER_ID: &str = "POCKETBOOK_USER_ID";
pub const ENV_TIMEOUT: &str = "POCKETBOOK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub timeout_secs: u64,
    pub notice_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".into(),
            user_id: None,
            timeout_secs: 15,
            notice_secs: 3,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }

    /// Read `path`; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(raw) = lookup(ENV_USER_ID) {
            let id = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid(format!("{}='{}' is not an id", ENV_USER_ID, raw)))?;
            self.user_id = Some(id);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("{}='{}' is not a number of seconds", ENV_TIMEOUT, raw))
            })?;
        }
        Ok(())
    }

    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let url = self.api_url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(ConfigError::Invalid("api_url is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_url '{}' must start with http:// or https://",
                url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }
        self.api_url = url;
        Ok(self)
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        ConfigError::Invalid("could not determine platform-specific config dir".into())
    })?;
    Ok(proj.config_dir().join("config.toml"))
}

/// File (or defaults), then `.env` and process environment on top.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    dotenvy::dotenv().ok();
    let mut settings = Settings::load(&path)?;
    settings.apply_env(|k| std::env::var(k).ok())?;
    settings.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"https://api.example.test/\"\nuser_id = 7\n").unwrap();

        let env: HashMap<&str, &str> = [(ENV_USER_ID, " 99 ")].into_iter().collect();
        let mut s = Settings::load(&path).unwrap();
        s.apply_env(|k| env.get(k).map(|v| v.to_string())).unwrap();
        let s = s.validate().unwrap();

        assert_eq!(s.api_url, "https://api.example.test");
        assert_eq!(s.user_id, Some(99));
        assert_eq!(s.timeout_secs, 15);
    }

    #[test]
    fn rejects_bad_values() {
        let mut s = Settings::default();
        assert!(s.apply_env(|k| (k == ENV_TIMEOUT).then(|| "soon".to_string())).is_err());
        let s = Settings {
            api_url: "ftp://nope".into(),
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn missing_file_means_defaults_and_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
        Settings::default().save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }
}
