//! OneTrust API data models
//!
//! Request and response types exchanged with the token and webhook endpoints.

mod auth;
mod scan;

pub use auth::{AccessToken, Credentials, TokenResponse};
pub use scan::{DataFields, Platform, UploadResponse};
