// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unknown source '{0}' (expected indeed, signalhire or linkedin_xray)")]
    UnknownSource(String),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("No text provided")]
    Empty,

    #[error("Input too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: usize, limit: usize },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Message safe to show to the caller. Input problems are described;
    /// anything else is reported generically.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Input(InputError::Io(_)) => "Failed to read input.".to_string(),
            AppError::Input(err) => err.to_string(),
            AppError::Extraction(err) => err.to_string(),
            AppError::Config(msg) => format!("Configuration error: {msg}"),
            _ => "Extraction failed. Please check your input.".to_string(),
        }
    }
}
