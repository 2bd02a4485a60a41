//! Init command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::models::Credentials;
use crate::client::{AuthApi, DEFAULT_TIMEOUT_SECS, OneTrustClient};
use crate::config::{Config, DEFAULT_ENVIRONMENT, first_present, validate_environment};
use crate::error::{ConfigError, Error, Result};

/// Run the init command
///
/// Prompts for the OneTrust environment, OAuth client credentials and webhook
/// ID, optionally verifies the credentials, and writes the config file.
/// Existing values are offered as defaults.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to otscan!".bold().green());
    println!("Let's set up your OneTrust configuration.\n");

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound(_))) => Config::default(),
        Err(err) => return Err(err),
    };

    let environment: String = Input::with_theme(&theme)
        .with_prompt("OneTrust environment subdomain")
        .default(
            config
                .environment
                .clone()
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        )
        .validate_with(|value: &String| -> std::result::Result<(), String> {
            validate_environment(value)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    let mut client_id_prompt = Input::<String>::with_theme(&theme);
    client_id_prompt = client_id_prompt.with_prompt("OAuth client ID");
    if let Some(existing) = config.client_id.clone() {
        client_id_prompt = client_id_prompt.default(existing);
    }
    let client_id = client_id_prompt.interact_text()?;

    let client_secret = Password::with_theme(&theme)
        .with_prompt("OAuth client secret")
        .interact()?;

    let mut webhook_prompt = Input::<String>::with_theme(&theme)
        .with_prompt("Integration webhook ID (optional)")
        .allow_empty(true);
    if let Some(existing) = config.webhook_id.clone() {
        webhook_prompt = webhook_prompt.default(existing);
    }
    let webhook_id = webhook_prompt.interact_text()?;

    config.environment = Some(validate_environment(&environment)?);
    config.client_id = Some(client_id.trim().to_string());
    config.client_secret = Some(client_secret);
    config.webhook_id = Some(webhook_id.trim().to_string()).filter(|id| !id.is_empty());

    let verify = Confirm::with_theme(&theme)
        .with_prompt("Verify credentials now?")
        .default(true)
        .interact()?;

    if verify {
        println!("\n{}", "Requesting access token...".cyan());
        let api_host = first_present(&[opts.api_host_ref(), config.api_host.as_deref()])
            .map(str::to_string);
        let timeout = opts
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = OneTrustClient::with_host(api_host, Duration::from_secs(timeout))?;
        let credentials = Credentials::new(
            client_id.trim(),
            config.client_secret.clone().unwrap_or_default(),
            config.environment.clone().unwrap_or_default(),
        );
        let token = client.get_token(&credentials).await?;
        if token.is_empty() {
            println!(
                "{}",
                "⚠ Token endpoint returned no access token; saving anyway.".yellow()
            );
        } else {
            println!("{}", "✓ Authentication successful!".green());
        }
    }

    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
