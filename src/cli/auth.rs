//! Auth command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::{CredentialArgs, GlobalOptions};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::AuthApi;
use crate::error::{Result, ScanError};
use crate::output::json::format_json;
use crate::output::progress::Spinner;
use crate::output::{self, Formattable};

/// Outcome of a credential check. Never carries the token itself.
#[derive(Debug, Serialize)]
pub struct AuthReport {
    pub environment: String,
    pub client_id: String,
    pub authenticated: bool,
}

impl Formattable for AuthReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Plain => Ok(self.authenticated.to_string()),
            OutputFormat::Pretty => Ok(format!(
                "{} Access token created successfully (environment: {}, client: {})",
                "✓".green(),
                self.environment.cyan(),
                self.client_id
            )),
        }
    }
}

/// Request an access token to verify the configured credentials
pub async fn run(opts: &GlobalOptions, args: &CredentialArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = ctx.credentials(args)?;

    let spinner = Spinner::start("Requesting access token...", ctx.format);
    let token = ctx.client.get_token(&credentials).await;
    spinner.finish();

    if token?.is_empty() {
        return Err(ScanError::MissingAccessToken.into());
    }

    let report = AuthReport {
        environment: credentials.environment.clone(),
        client_id: credentials.client_id.clone(),
        authenticated: true,
    };
    output::print(&report, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AuthReport {
        AuthReport {
            environment: "app-eu".to_string(),
            client_id: "client-1".to_string(),
            authenticated: true,
        }
    }

    #[test]
    fn test_auth_report_json() {
        let rendered = report().format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["data"]["environment"], "app-eu");
        assert_eq!(value["data"]["authenticated"], true);
    }

    #[test]
    fn test_auth_report_pretty() {
        let rendered = report().format(OutputFormat::Pretty).unwrap();
        assert!(rendered.contains("Access token created successfully"));
        assert!(rendered.contains("client-1"));
    }
}
