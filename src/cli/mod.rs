//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::Platform;

pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod init;
pub mod scan;
pub mod status;

pub use args::{CredentialArgs, OutputFormat};
pub use context::CommandContext;

/// otscan - upload mobile app builds to OneTrust and trigger automated SDK scans
#[derive(Parser, Debug)]
#[command(name = "otscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, plain, json)
    #[arg(
        long,
        global = true,
        env = "OTSCAN_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "OTSCAN_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "OTSCAN_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Request timeout in seconds (default 300)
    #[arg(
        long,
        global = true,
        env = "OTSCAN_TIMEOUT",
        hide_env = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Base URL override replacing https://{environment}.onetrust.com
    #[arg(long, global = true, env = "ONETRUST_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a build to OneTrust and trigger an SDK scan
    #[command(after_help = "EXAMPLES:\n  \
            otscan scan --build-path app.ipa --platform ios --app-name \"My App\"   # New app scan\n  \
            otscan scan --build-path app.apk --platform android --app-id <id>     # Rescan\n  \
            REQUEST_ID=$(otscan --format plain scan ...)                           # Capture the request ID")]
    Scan(ScanArgs),

    /// Verify OAuth credentials by requesting an access token
    Auth {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Initialize otscan configuration
    Init,

    /// Show configuration status
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   otscan completion bash > /etc/bash_completion.d/otscan
  zsh:    otscan completion zsh > \"${fpath[1]}/_otscan\"
  fish:   otscan completion fish > ~/.config/fish/completions/otscan.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `otscan scan`
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Path to the build artifact to upload (e.g. app.apk, app.aab, app.ipa)
    #[arg(long, env = "ONETRUST_BUILD_PATH")]
    pub build_path: PathBuf,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// OneTrust integration webhook identifier used as a path parameter by the upload API
    #[arg(long, env = "ONETRUST_WEBHOOK_ID")]
    pub webhook_id: Option<String>,

    /// Existing OneTrust mobile application ID. Provide this to rescan an existing app;
    /// if omitted, the scan is treated as a new app scan (requires --app-name)
    #[arg(long, env = "ONETRUST_APP_ID")]
    pub app_id: Option<String>,

    /// Mobile application name (required for new app scans; ignored for rescans)
    #[arg(long, env = "ONETRUST_APP_NAME")]
    pub app_name: Option<String>,

    /// Target platform of the build: IOS or ANDROID (case-insensitive)
    #[arg(long, env = "ONETRUST_PLATFORM")]
    pub platform: Platform,
}
