//! OAuth credential arguments shared by `scan` and `auth`

use clap::Args;

/// OneTrust OAuth client credentials and environment.
///
/// Every value can also come from the config file; see `CommandContext::credentials`.
#[derive(Debug, Clone, Default, Args)]
pub struct CredentialArgs {
    /// OneTrust OAuth client ID used to obtain an access token (client_credentials)
    #[arg(long, env = "ONETRUST_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OneTrust OAuth client secret used to obtain an access token (client_credentials)
    #[arg(long, env = "ONETRUST_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// OneTrust environment subdomain used to build the base URL (e.g. app-eu, app-de, app).
    /// Defaults to app-eu
    #[arg(long, env = "ONETRUST_ENVIRONMENT")]
    pub environment: Option<String>,
}
