//! Scan request and outcome types

use std::path::PathBuf;

use serde::Serialize;

use crate::client::models::{Credentials, DataFields, Platform};
use crate::error::ConfigError;

/// Everything needed to upload one build and trigger one scan
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Local path to the APK/AAB/IPA artifact
    pub build_path: PathBuf,

    /// OAuth credentials and environment
    pub credentials: Credentials,

    /// Integration webhook identifier
    pub webhook_id: String,

    /// Existing OneTrust app ID; selects a rescan when non-blank
    pub app_id: Option<String>,

    /// App name; required when `app_id` is blank
    pub app_name: Option<String>,

    pub platform: Platform,
}

impl ScanRequest {
    /// Build the `dataFields` metadata for this request's scan mode
    pub fn data_fields(&self) -> Result<DataFields, ConfigError> {
        DataFields::for_app(
            self.app_id.as_deref(),
            self.app_name.as_deref(),
            self.platform,
        )
    }
}

/// Result of an accepted upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The webhook accepted the build and returned a tracking identifier
    Accepted {
        #[serde(rename = "requestId")]
        request_id: String,
    },

    /// The webhook answered 2xx without a `requestId`. Callers must not treat
    /// this as a full success.
    IncompleteSuccess,
}

impl ScanOutcome {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ScanOutcome::Accepted { request_id } => Some(request_id.as_str()),
            ScanOutcome::IncompleteSuccess => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ScanOutcome::Accepted { .. })
    }
}
