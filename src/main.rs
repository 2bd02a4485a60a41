//! otscan - upload mobile app builds to OneTrust and trigger automated SDK scans

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod scan;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

/// Exit code when OneTrust accepted the upload but returned no request ID
const EXIT_INCOMPLETE_SUCCESS: i32 = 3;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Scan(ref args) => {
            let outcome = cli::scan::run(&opts, args).await?;
            if outcome.is_complete() {
                Ok(0)
            } else {
                Ok(EXIT_INCOMPLETE_SUCCESS)
            }
        }
        Commands::Auth { ref credentials } => cli::auth::run(&opts, credentials).await.map(|_| 0),
        Commands::Init => cli::init::run(&opts).await.map(|_| 0),
        Commands::Status => cli::status::run(&opts).map(|_| 0),
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(0)
        }
    }
}
