//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, DEFAULT_ENVIRONMENT};
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "otscan Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            if config_path.exists() {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    config_path.display().to_string().cyan(),
                    "(not created)".dimmed()
                );
            }
            println!();

            match config.environment.as_deref() {
                Some(env) => println!("{} Environment: {}", "✓".green(), env),
                None => println!(
                    "{} Environment: {} {}",
                    "○".dimmed(),
                    DEFAULT_ENVIRONMENT,
                    "(default)".dimmed()
                ),
            }

            print_field("Client ID", config.client_id.as_deref());

            if config.client_secret.is_some() {
                println!("{} Client secret configured", "✓".green());
            } else {
                println!("{} Client secret not configured", "○".dimmed());
            }

            print_field("Webhook ID", config.webhook_id.as_deref());

            if let Some(ref host) = config.api_host {
                println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
            }
            if let Some(timeout) = config.timeout_secs {
                println!("{} Request timeout: {}s", "○".dimmed(), timeout);
            }

            if config.client_id.is_none() || config.client_secret.is_none() {
                println!();
                println!(
                    "  → Run {} or set ONETRUST_CLIENT_ID / ONETRUST_CLIENT_SECRET",
                    "otscan init".cyan()
                );
            }
            println!();
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
            println!(
                "Run {} to create a configuration file.",
                "otscan init".cyan()
            );
            println!();
        }
    }

    Ok(())
}

fn print_field(label: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("{} {}: {}", "✓".green(), label, v),
        None => println!("{} {} not configured", "○".dimmed(), label),
    }
}
