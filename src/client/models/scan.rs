//! Scan upload models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Target platform of an uploaded build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "IOS",
            Platform::Android => "ANDROID",
        }
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IOS" => Ok(Platform::Ios),
            "ANDROID" => Ok(Platform::Android),
            _ => Err(ConfigError::InvalidPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata sent as the JSON-encoded `dataFields` multipart part.
///
/// A rescan references an existing OneTrust app by ID; a new scan registers
/// the app by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataFields {
    Rescan {
        #[serde(rename = "appId")]
        app_id: String,
        platform: Platform,
    },
    NewApp {
        name: String,
        platform: Platform,
    },
}

impl DataFields {
    /// Select the scan mode from the optional app ID and app name.
    ///
    /// A non-blank `app_id` always wins and `app_name` is ignored. Otherwise
    /// `app_name` must be non-blank.
    pub fn for_app(
        app_id: Option<&str>,
        app_name: Option<&str>,
        platform: Platform,
    ) -> Result<Self, ConfigError> {
        if let Some(app_id) = app_id.filter(|id| !id.trim().is_empty()) {
            return Ok(DataFields::Rescan {
                app_id: app_id.to_string(),
                platform,
            });
        }

        match app_name.filter(|name| !name.trim().is_empty()) {
            Some(name) => Ok(DataFields::NewApp {
                name: name.to_string(),
                platform,
            }),
            None => Err(ConfigError::MissingAppName),
        }
    }

    pub fn is_rescan(&self) -> bool {
        matches!(self, DataFields::Rescan { .. })
    }

    pub fn platform(&self) -> Platform {
        match self {
            DataFields::Rescan { platform, .. } | DataFields::NewApp { platform, .. } => *platform,
        }
    }
}

/// Body of a successful webhook upload response (documented status 202)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub request_id: Option<String>,
}
