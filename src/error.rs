use thiserror::Error;

/// Custom error types for combobox
#[derive(Debug, Error)]
pub enum ComboboxError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid items file: {0}")]
    InvalidItems(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
