//! Scan command implementation

use std::sync::Arc;

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, ScanArgs};
use crate::error::Result;
use crate::output::json::format_json;
use crate::output::progress::Spinner;
use crate::output::Formattable;
use crate::scan::{ScanOutcome, ScanRequest, ScanUploader};

impl Formattable for ScanOutcome {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Plain => Ok(self.request_id().unwrap_or_default().to_string()),
            OutputFormat::Pretty => Ok(match self {
                ScanOutcome::Accepted { request_id } => format!(
                    "{} Build uploaded successfully to OneTrust. Request ID: {}",
                    "✓".green(),
                    request_id.bold()
                ),
                ScanOutcome::IncompleteSuccess => format!(
                    "{} OneTrust accepted the upload but returned no request ID",
                    "⚠".yellow()
                ),
            }),
        }
    }
}

/// Upload the build and print the resulting request ID.
///
/// Returns the outcome so the caller can pick an exit code; an incomplete
/// success is not an error here.
pub async fn run(opts: &GlobalOptions, args: &ScanArgs) -> Result<ScanOutcome> {
    let ctx = CommandContext::new(opts)?;

    let request = ScanRequest {
        build_path: args.build_path.clone(),
        credentials: ctx.credentials(&args.credentials)?,
        webhook_id: ctx.webhook_id(args.webhook_id.as_deref())?,
        app_id: args.app_id.clone(),
        app_name: args.app_name.clone(),
        platform: args.platform,
    };
    debug!("Scan request: {:?}", request);

    let uploader = ScanUploader::new(Arc::clone(&ctx.client));
    let spinner = Spinner::start(
        format!("Uploading '{}' to OneTrust...", request.build_path.display()),
        ctx.format,
    );
    let outcome = uploader.upload(&request).await;
    spinner.finish();
    let outcome = outcome?;

    let rendered = outcome.format(ctx.format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    if !outcome.is_complete() && ctx.format == OutputFormat::Plain {
        eprintln!("Warning: OneTrust accepted the upload but returned no request ID");
    }

    Ok(outcome)
}
