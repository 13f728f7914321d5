//! Error types for otakit

use std::path::PathBuf;
use thiserror::Error;

/// Errors while embedding a binary file into a C header
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write header file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors while uploading an image to an OTA endpoint
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} - {body}")]
    HttpStatus { status: u16, body: String },
}
