use crate::cli::Cli;
use anyhow::{Context, Result};
use doc2text::{handle_upload, ErrorKind, Extractor, ExtractorConfig, UploadError, UploadLimits};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tracing::error;

/// Runs one upload through the extractor and prints the JSON response.
///
/// Exit status: 0 on success, 2 when the document is at fault, 1 when the
/// failure is internal.
pub fn convert(cli: &Cli) -> Result<ExitCode> {
    let extractor = Extractor::new(ExtractorConfig {
        scratch_dir: cli.scratch_dir.clone(),
    });
    let limits = UploadLimits::from_megabytes(cli.max_size_mb);

    let outcome = match fs::read(&cli.input) {
        Ok(data) => {
            let filename = cli.name.clone().unwrap_or_else(|| file_name(cli));
            run_guarded(|| handle_upload(&extractor, limits, &filename, &data))
        }
        Err(e) => {
            error!(input = %cli.input.display(), error = %e, "Failed to read input");
            Err(UploadError::MissingFile)
        }
    };

    match outcome {
        Ok(response) => {
            print_json(&response, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::BadRequest | ErrorKind::PayloadTooLarge => ExitCode::from(2),
                ErrorKind::Internal => ExitCode::FAILURE,
            };
            print_json(&err.into_response(), cli.pretty)?;
            Ok(code)
        }
    }
}

/// Turns a panic escaping the pipeline into an internal error.
fn run_guarded<T>(f: impl FnOnce() -> Result<T, UploadError>) -> Result<T, UploadError> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unexpected failure".to_string());
        error!(%msg, "Extraction panicked");
        Err(UploadError::Internal(msg))
    })
}

fn file_name(cli: &Cli) -> String {
    cli.input
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize response")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write response")?;
    Ok(())
}
