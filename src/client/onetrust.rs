//! OneTrust API client implementation

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client as HttpClient};

use super::models::{AccessToken, Credentials, DataFields, TokenResponse, UploadResponse};
use super::{AuthApi, ScanApi};
use crate::error::{ApiError, Result};

/// OneTrust base URL; `{environment}` is the tenant subdomain
const API_BASE_URL_TEMPLATE: &str = "https://{environment}.onetrust.com";

/// OAuth token endpoint path
const TOKEN_PATH: &str = "/api/access/v1/oauth/token";

/// Integration webhook endpoint path, followed by `/{webhook_id}`
const WEBHOOK_PATH: &str = "/integrationmanager/api/v1/webhook";

/// Default overall request timeout. Build uploads can be large.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

const CONNECT_TIMEOUT_SECS: u64 = 30;

/// OneTrust API client
///
/// Holds no authentication state; every call receives what it needs.
pub struct OneTrustClient {
    http: HttpClient,
    api_host: Option<String>,
}

impl OneTrustClient {
    /// Create a client for the public OneTrust hosts
    #[allow(dead_code)]
    pub fn new() -> Result<Self> {
        Self::with_host(None, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an optional base URL override and request timeout.
    ///
    /// When `api_host` is set it replaces the whole `https://{environment}.onetrust.com`
    /// template, so the environment is ignored for URL construction.
    pub fn with_host(api_host: Option<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("otscan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_host: api_host
                .map(|host| host.trim_end_matches('/').to_string())
                .filter(|host| !host.is_empty()),
        })
    }

    /// Resolve the API base URL for an environment
    pub fn base_url(&self, environment: &str) -> String {
        match &self.api_host {
            Some(host) => host.clone(),
            None => API_BASE_URL_TEMPLATE.replace("{environment}", environment),
        }
    }

    /// Read a response body, returning the status alongside it.
    async fn read_response(
        response: reqwest::Response,
    ) -> std::result::Result<(reqwest::StatusCode, String), ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }
}

#[async_trait]
impl AuthApi for OneTrustClient {
    async fn get_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let url = format!("{}{}", self.base_url(&credentials.environment), TOKEN_PATH);
        debug!("Requesting access token from {}", url);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(ApiError::from)?;

        let (status, body) = Self::read_response(response).await?;
        debug!("Token endpoint responded with {}", status);

        if !status.is_success() {
            return Err(ApiError::Authentication {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse token response: {}", e))
        })?;

        Ok(AccessToken::new(token.access_token.unwrap_or_default()))
    }
}

#[async_trait]
impl ScanApi for OneTrustClient {
    async fn upload_build(
        &self,
        environment: &str,
        webhook_id: &str,
        token: &AccessToken,
        build_path: &Path,
        data_fields: &DataFields,
    ) -> Result<UploadResponse> {
        let url = format!("{}{}/{}", self.base_url(environment), WEBHOOK_PATH, webhook_id);
        let data_fields = serde_json::to_string(data_fields)?;

        // The handle moves into the request body and is dropped with it.
        let file = tokio::fs::File::open(build_path).await?;
        let length = file.metadata().await?.len();
        let file_name = build_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "build".to_string());

        debug!(
            "Uploading {} ({} bytes) to {} with dataFields {}",
            file_name, length, url, data_fields
        );

        let file_part = Part::stream_with_length(Body::from(file), length)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(ApiError::from)?;

        let form = Form::new()
            .part("file", file_part)
            .text("dataFields", data_fields);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let (status, body) = Self::read_response(response).await?;
        debug!("Webhook responded with {}", status);

        if !status.is_success() {
            return Err(ApiError::Upload {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        if body.trim().is_empty() {
            return Ok(UploadResponse::default());
        }

        let parsed: UploadResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse upload response: {}", e))
        })?;

        Ok(parsed)
    }
}
