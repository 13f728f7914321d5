//! Otakit Core - Host-side primitives for HTTP OTA firmware workflows
//!
//! This crate provides the logic behind the `otakit` command-line tools:
//! embedding binary blobs as include-guarded C headers so they can be
//! compiled into device firmware, and uploading firmware images to a
//! device's web OTA endpoint.

pub mod embed;
pub mod error;
pub mod upload;

// Re-export commonly used items
pub use embed::{convert, header_idents, render_header, HeaderIdents};
pub use error::{EmbedError, UploadError};
pub use upload::{
    upload, Credentials, FlashMode, UploadConfig, DEFAULT_TIMEOUT_SECS, FLASH_MODE_HEADER,
};
