//! Mock OneTrust API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, ScanApi};
use super::models::{AccessToken, Credentials, DataFields, UploadResponse};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockOneTrustClient::new()
///     .with_token("T")
///     .with_request_id("R");
///
/// let token = mock.get_token(&credentials).await?;
/// assert_eq!(token.as_str(), "T");
/// ```
pub struct MockOneTrustClient {
    /// Token to return from get_token
    token: Arc<Mutex<AccessToken>>,
    /// Response to return from upload_build
    upload_response: Arc<Mutex<UploadResponse>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured uploads for test assertions
    captured_uploads: Arc<Mutex<Vec<CapturedUpload>>>,
}

/// Call counts per API method
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub get_token: usize,
    pub upload_build: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.get_token + self.upload_build
    }
}

/// An upload as seen by the mock
#[derive(Debug, Clone)]
pub struct CapturedUpload {
    pub environment: String,
    pub webhook_id: String,
    pub token: AccessToken,
    pub build_path: PathBuf,
    pub data_fields: DataFields,
}

impl Default for MockOneTrustClient {
    fn default() -> Self {
        Self {
            token: Arc::new(Mutex::new(AccessToken::new("mock-token"))),
            upload_response: Arc::new(Mutex::new(UploadResponse {
                request_id: Some("mock-request-id".to_string()),
            })),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockOneTrustClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token returned by `get_token`
    pub fn with_token(self, token: &str) -> Self {
        *self.token.try_lock().expect("mock not shared yet") = AccessToken::new(token);
        self
    }

    /// Request ID returned by `upload_build`; `None` simulates a 2xx without `requestId`
    pub fn with_request_id(self, request_id: Option<&str>) -> Self {
        *self.upload_response.try_lock().expect("mock not shared yet") = UploadResponse {
            request_id: request_id.map(str::to_string),
        };
        self
    }

    /// Error returned by the next API call
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        *self.call_count.lock().await
    }

    pub async fn captured_uploads(&self) -> Vec<CapturedUpload> {
        self.captured_uploads.lock().await.clone()
    }

    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl AuthApi for MockOneTrustClient {
    async fn get_token(&self, _credentials: &Credentials) -> Result<AccessToken> {
        self.call_count.lock().await.get_token += 1;
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.token.lock().await.clone())
    }
}

#[async_trait]
impl ScanApi for MockOneTrustClient {
    async fn upload_build(
        &self,
        environment: &str,
        webhook_id: &str,
        token: &AccessToken,
        build_path: &Path,
        data_fields: &DataFields,
    ) -> Result<UploadResponse> {
        self.call_count.lock().await.upload_build += 1;
        self.captured_uploads.lock().await.push(CapturedUpload {
            environment: environment.to_string(),
            webhook_id: webhook_id.to_string(),
            token: token.clone(),
            build_path: build_path.to_path_buf(),
            data_fields: data_fields.clone(),
        });
        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.upload_response.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_defaults() {
        let mock = MockOneTrustClient::new();
        let creds = Credentials::new("id", "secret", "app-eu");

        let token = mock.get_token(&creds).await.unwrap();
        assert_eq!(token.as_str(), "mock-token");
        assert_eq!(mock.call_counts().await.get_token, 1);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockOneTrustClient::new().with_error(ApiError::Transport("down".into()));
        let creds = Credentials::new("id", "secret", "app-eu");

        assert!(mock.get_token(&creds).await.is_err());
        assert!(mock.get_token(&creds).await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
