//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, Credentials};
use crate::error::Result;

/// Authentication operations for the OneTrust API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange client credentials for a bearer token.
    ///
    /// A 2xx response without `access_token` yields an empty token rather
    /// than an error; callers decide how to treat it.
    async fn get_token(&self, credentials: &Credentials) -> Result<AccessToken>;
}
