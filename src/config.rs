//! User configuration
//!
//! Read from `user.json` in the config directory. The directory is
//! `$EXERCISM_CONFIG_HOME` when set, otherwise `<platform config dir>/exercism`.
//! This crate never writes the file.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config directory
pub const CONFIG_HOME_ENV: &str = "EXERCISM_CONFIG_HOME";

/// Config file name inside the config directory
pub const USER_CONFIG_FILE: &str = "user.json";

/// API base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "https://api.exercism.org/v1";

/// Contents of `user.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    /// API token
    #[serde(default)]
    pub token: String,
    /// Workspace root directory
    #[serde(default)]
    pub workspace: String,
    /// Base URL of the API
    #[serde(default)]
    pub apibaseurl: String,
}

/// Validated settings needed to submit
#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// API token
    pub token: String,
    /// Workspace root directory
    pub workspace: PathBuf,
    /// Base URL of the API, without a trailing slash
    pub api_base_url: String,
}

/// Directory holding the user's config files
pub fn config_dir() -> Option<PathBuf> {
    env::var_os(CONFIG_HOME_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("exercism")))
}

impl UserConfig {
    /// Load the config from the default config directory
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Load `user.json` from `dir`; a missing file yields an empty config
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(USER_CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loaded user config");
                serde_json::from_str(&contents).map_err(|e| {
                    Error::Config(format!("invalid config file {}: {e}", path.display()))
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a config value by key
    pub fn get_string(&self, key: &str) -> Option<&str> {
        let value = match key {
            "token" => &self.token,
            "workspace" => &self.workspace,
            "apibaseurl" => &self.apibaseurl,
            _ => return None,
        };
        Some(value.as_str()).filter(|v| !v.is_empty())
    }

    /// Check the values required to submit and fill in defaults
    pub fn submit_settings(&self) -> Result<SubmitSettings> {
        let token = self.get_string("token").ok_or_else(|| {
            Error::Config(
                "\n\n    Welcome to Exercism!\n\n    To get started, you need to configure the tool with your API token.\n    Find your token at\n\n        https://exercism.org/settings/api_cli\n\n    and add it to your user.json config file.\n".to_string(),
            )
        })?;

        let api_base_url = self
            .get_string("apibaseurl")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&api_base_url)
            .map_err(|e| Error::Config(format!("invalid apibaseurl '{api_base_url}': {e}")))?;

        let workspace = match self.get_string("workspace") {
            Some(dir) => PathBuf::from(dir),
            None => default_workspace()?,
        };

        Ok(SubmitSettings {
            token: token.to_string(),
            workspace,
            api_base_url,
        })
    }
}

fn default_workspace() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("exercism"))
        .ok_or_else(|| Error::Config("cannot determine a default workspace".to_string()))
}
