//! OneTrust API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod onetrust;

pub use api::{AuthApi, ScanApi};
#[cfg(test)]
pub use mock::MockOneTrustClient;
pub use onetrust::{DEFAULT_TIMEOUT_SECS, OneTrustClient};

/// Complete OneTrust API surface used by the scan workflow.
///
/// Implemented automatically for anything that provides both halves, so the
/// real client and test doubles are interchangeable.
pub trait OneTrustApi: AuthApi + ScanApi {}

impl<T: AuthApi + ScanApi> OneTrustApi for T {}
