// ABOUTME: Error types for the slidedeckml compiler
// ABOUTME: Covers the load and write boundary; rendering itself never fails

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("Failed to read or write file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Invalid document tree: {0}")]
    DocumentError(#[from] serde_json::Error),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SlideError>;
