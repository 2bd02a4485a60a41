//! Configuration management for otscan
//!
//! Values resolve as: CLI flag > environment variable > config file > default.
//! Flags and environment variables are handled by clap; this module owns the
//! config file layer and boundary validation.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment subdomain used when nothing else is configured
pub const DEFAULT_ENVIRONMENT: &str = "app-eu";

/// Persisted defaults for `otscan` commands
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// OneTrust environment subdomain (e.g. `app-eu`, `app-de`, `app`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// OAuth client ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Integration webhook ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,

    /// Base URL override replacing `https://{environment}.onetrust.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("webhook_id", &self.webhook_id)
            .field("api_host", &self.api_host)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".otscan").join("config.yaml"))
    }

    /// Resolve an optional explicit path against the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields an empty config; a
    /// missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds the client secret
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

/// Validate an environment subdomain and return it trimmed.
///
/// Must be non-empty and must not carry a protocol prefix.
pub fn validate_environment(value: &str) -> std::result::Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvironment {
            value: value.to_string(),
            reason: "must be a non-empty subdomain (e.g., 'app-eu')",
        });
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Err(ConfigError::InvalidEnvironment {
            value: value.to_string(),
            reason: "must not include protocol (https://)",
        });
    }
    Ok(trimmed.to_string())
}

/// First non-blank value among the candidates, in precedence order.
pub fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.trim().is_empty())
}
