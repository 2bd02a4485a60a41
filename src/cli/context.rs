//! Command execution context
//!
//! Provides a unified context for command execution: config loading, value
//! resolution across flags, environment and config file, and client setup.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cli::args::{CredentialArgs, GlobalOptions};
use crate::cli::OutputFormat;
use crate::client::models::Credentials;
use crate::client::{DEFAULT_TIMEOUT_SECS, OneTrustClient};
use crate::config::{Config, DEFAULT_ENVIRONMENT, first_present, validate_environment};
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// API client (Arc-wrapped so uploaders can share it)
    pub client: Arc<OneTrustClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (explicit `--config` path or default location)
    /// and builds the API client with the resolved host override and timeout.
    ///
    /// # Errors
    /// Returns error if an explicit config file is missing or unparseable.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        debug!("Loaded configuration: {:?}", config);

        let api_host = first_present(&[opts.api_host_ref(), config.api_host.as_deref()])
            .map(str::to_string);
        let timeout = opts
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let client = Arc::new(OneTrustClient::with_host(
            api_host,
            Duration::from_secs(timeout),
        )?);

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Resolve credentials from flags/env, falling back to the config file.
    ///
    /// The environment defaults to `app-eu` and is validated here.
    pub fn credentials(&self, args: &CredentialArgs) -> Result<Credentials> {
        let client_id = first_present(&[
            args.client_id.as_deref(),
            self.config.client_id.as_deref(),
        ])
        .ok_or(ConfigError::MissingField {
            flag: "client-id",
            env: "ONETRUST_CLIENT_ID",
        })?;

        let client_secret = first_present(&[
            args.client_secret.as_deref(),
            self.config.client_secret.as_deref(),
        ])
        .ok_or(ConfigError::MissingField {
            flag: "client-secret",
            env: "ONETRUST_CLIENT_SECRET",
        })?;

        // A blank flag still counts as set so that the boundary rejects it.
        let environment = args
            .environment
            .as_deref()
            .or(self.config.environment.as_deref())
            .unwrap_or(DEFAULT_ENVIRONMENT);
        let environment = validate_environment(environment)?;

        Ok(Credentials::new(client_id, client_secret, environment))
    }

    /// Resolve the webhook ID from flags/env, falling back to the config file.
    pub fn webhook_id(&self, flag: Option<&str>) -> Result<String> {
        first_present(&[flag, self.config.webhook_id.as_deref()])
            .map(|id| id.trim().to_string())
            .ok_or_else(|| {
                ConfigError::MissingField {
                    flag: "webhook-id",
                    env: "ONETRUST_WEBHOOK_ID",
                }
                .into()
            })
    }
}
