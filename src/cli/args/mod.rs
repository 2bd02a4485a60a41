//! Shared CLI argument types
//!
//! Reusable argument structs that can be flattened into commands using
//! `#[command(flatten)]`.

mod common;
mod credentials;
mod global;

pub use common::OutputFormat;
pub use credentials::CredentialArgs;
pub use global::GlobalOptions;
