//! Authentication models

use std::fmt;

use serde::Deserialize;

/// OAuth client credentials plus the environment they belong to.
///
/// Supplied once per invocation and never persisted by the client.
#[derive(Clone)]
pub struct Credentials {
    /// OAuth client ID
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Environment subdomain (e.g. `app-eu`), without protocol
    pub environment: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment: environment.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

/// Opaque bearer token, valid for the current invocation only.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token endpoint answered without a usable token
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Body of a successful token endpoint response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::new("client", "s3cr3t", "app-eu");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("client"));
        assert!(debug.contains("app-eu"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_access_token_debug_hides_value() {
        let token = AccessToken::new("eyJhbGciOi");
        assert!(!format!("{:?}", token).contains("eyJ"));
        assert_eq!(token.as_str(), "eyJhbGciOi");
    }

    #[test]
    fn test_access_token_is_empty() {
        assert!(AccessToken::new("").is_empty());
        assert!(AccessToken::new("   ").is_empty());
        assert!(!AccessToken::new("abc").is_empty());
    }

    #[test]
    fn test_token_response_without_access_token() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"token_type":"bearer"}"#).unwrap();
        assert!(parsed.access_token.is_none());
    }

    #[test]
    fn test_token_response_with_access_token() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":3600}"#).unwrap();
        assert_eq!(parsed.access_token.as_deref(), Some("abc"));
    }
}
