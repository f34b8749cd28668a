use anyhow::{Context, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so JSON on stdout stays clean.
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging not initialized: {}", e);
    }
}

/// Decodes raw page bytes, dropping invalid UTF-8 sequences.
pub fn decode_input(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s.replace(char::REPLACEMENT_CHARACTER, ""),
    }
}

pub fn validate_args(args: &crate::args::Args) -> Result<()> {
    if let Some(workers) = args.workers {
        if workers == 0 {
            anyhow::bail!("--workers must be greater than 0");
        }
    }

    Ok(())
}

/// Worker count when `--workers` is not given.
pub fn default_workers() -> usize {
    std::cmp::min(num_cpus::get(), 8)
}

pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize output")
}

/// Prints `json` to stdout, or writes it to `output` and prints a
/// confirmation line.
pub fn emit(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            println!("Output written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// The structured error object printed on failure.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
