//! Scan upload API trait

use std::path::Path;

use async_trait::async_trait;

use crate::client::models::{AccessToken, DataFields, UploadResponse};
use crate::error::Result;

/// Build upload operations for the OneTrust integration webhooks
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// Upload a build artifact and its scan metadata to a webhook.
    ///
    /// The artifact is opened for the duration of the request only.
    async fn upload_build(
        &self,
        environment: &str,
        webhook_id: &str,
        token: &AccessToken,
        build_path: &Path,
        data_fields: &DataFields,
    ) -> Result<UploadResponse>;
}
