//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - OAuth client-credentials token exchange
//! - [`ScanApi`] - Build upload to an integration webhook
//!
//! The [`OneTrustApi`](super::OneTrustApi) super-trait combines both.

mod auth;
mod scan;

pub use auth::AuthApi;
pub use scan::ScanApi;
