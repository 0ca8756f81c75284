// src/input.rs
use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::utils::error::InputError;

/// Payload cap applied when neither the CLI nor the environment sets one.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 2 * 1024 * 1024;

/// Environment variable consulted when `--max-input-bytes` is not given.
pub const MAX_INPUT_BYTES_ENV: &str = "MAX_INPUT_BYTES";

/// Resolves the input cap: explicit value, then environment, then default.
pub fn resolve_max_input_bytes(explicit: Option<usize>) -> usize {
    if let Some(limit) = explicit {
        tracing::debug!("Using max input size {} from command-line argument", limit);
        return limit;
    }

    match std::env::var(MAX_INPUT_BYTES_ENV).ok().map(|v| v.trim().parse::<usize>()) {
        Some(Ok(limit)) => {
            tracing::debug!("Using max input size {} from {}", limit, MAX_INPUT_BYTES_ENV);
            limit
        }
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid {}: {}", MAX_INPUT_BYTES_ENV, e);
            DEFAULT_MAX_INPUT_BYTES
        }
        None => DEFAULT_MAX_INPUT_BYTES,
    }
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub async fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => {
            tracing::info!("Reading input from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        None => {
            tracing::info!("Reading input from stdin");
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}

/// Rejects payloads over `limit` bytes and whitespace-only payloads.
pub fn validate_input(text: &str, limit: usize) -> Result<&str, InputError> {
    if text.len() > limit {
        return Err(InputError::TooLarge {
            size: text.len(),
            limit,
        });
    }
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}
