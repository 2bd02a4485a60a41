//! Build upload and scan trigger workflow
//!
//! [`ScanUploader`] runs the two-step OneTrust flow: fetch a client-credentials
//! token, then post the build and its `dataFields` metadata to an integration
//! webhook. Local checks (artifact exists, scan mode resolvable) run before
//! any network call, and every step short-circuits on failure.

mod request;

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::client::OneTrustApi;
use crate::error::{Result, ScanError};

pub use request::{ScanOutcome, ScanRequest};

/// Uploads builds through any [`OneTrustApi`] implementation.
///
/// Holds no per-call state; a single uploader can serve concurrent uploads.
pub struct ScanUploader<C> {
    client: Arc<C>,
}

impl<C: OneTrustApi> ScanUploader<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Upload the build described by `request` and trigger a scan.
    ///
    /// Returns [`ScanOutcome::IncompleteSuccess`] when the webhook accepted the
    /// upload but did not return a request ID.
    pub async fn upload(&self, request: &ScanRequest) -> Result<ScanOutcome> {
        ensure_build_file(&request.build_path)?;

        let data_fields = request.data_fields()?;
        debug!(
            "Scan mode: {} (platform {})",
            if data_fields.is_rescan() { "rescan" } else { "new app" },
            data_fields.platform()
        );

        let token = self.client.get_token(&request.credentials).await?;
        if token.is_empty() {
            return Err(ScanError::MissingAccessToken.into());
        }
        info!("Access token created successfully");

        info!(
            "Starting upload of build '{}' to OneTrust",
            request.build_path.display()
        );
        let response = self
            .client
            .upload_build(
                &request.credentials.environment,
                &request.webhook_id,
                &token,
                &request.build_path,
                &data_fields,
            )
            .await?;

        match response.request_id.filter(|id| !id.trim().is_empty()) {
            Some(request_id) => {
                info!("Build uploaded, request ID: {}", request_id);
                Ok(ScanOutcome::Accepted { request_id })
            }
            None => Ok(ScanOutcome::IncompleteSuccess),
        }
    }
}

/// The artifact must be an existing regular file.
fn ensure_build_file(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(ScanError::FileNotFound(path.to_path_buf()).into()),
    }
}
